//! Log store: the append-only CSV history of completed sessions.

use std::fs::OpenOptions;
use std::path::PathBuf;

use csv::{ReaderBuilder, WriterBuilder};

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::{LogEntry, LOG_HEADER};

/// Result of scanning the log for one day.
#[derive(Debug, Default)]
pub struct DayReport {
    /// Raw matching rows, in file order.
    pub rows: Vec<String>,
    /// Sum of `duration_hours` over the matching rows.
    pub total_hours: f64,
    /// Malformed rows encountered anywhere in the scan: (1-based data row
    /// number, reason).
    pub skipped: Vec<(usize, String)>,
}

#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(cfg: &Config) -> Self {
        LogStore {
            path: cfg.log_file(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the log with its fixed header line. The header is written
    /// exactly once, at creation.
    pub fn init_if_absent(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        let mut wtr = WriterBuilder::new().from_path(&self.path)?;
        wtr.write_record(LOG_HEADER)?;
        wtr.flush()?;
        Ok(())
    }

    /// Append one completed session as a single six-field row.
    pub fn append(&self, entry: &LogEntry) -> AppResult<()> {
        self.init_if_absent()?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        wtr.write_record(entry.to_fields())?;
        wtr.flush()?;
        Ok(())
    }

    /// Streaming scan: skip the header, keep rows whose whole `date` field
    /// equals the target, accumulate durations. Malformed rows are recorded
    /// and skipped; the scan always continues.
    pub fn scan_day(&self, date: &str) -> AppResult<DayReport> {
        let mut report = DayReport::default();
        if !self.path.exists() {
            return Ok(report);
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        for (i, row) in rdr.records().enumerate() {
            let row_no = i + 1;
            let record = match row {
                Ok(r) => r,
                Err(e) => {
                    report.skipped.push((row_no, e.to_string()));
                    continue;
                }
            };
            let fields: Vec<&str> = record.iter().collect();
            let entry = match LogEntry::from_fields(&fields) {
                Ok(e) => e,
                Err(reason) => {
                    report.skipped.push((row_no, reason));
                    continue;
                }
            };
            if entry.date == date {
                report.total_hours += entry.duration_hours;
                report.rows.push(fields.join(","));
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> LogStore {
        let cfg = Config {
            root: dir.to_path_buf(),
            test: true,
        };
        LogStore::new(&cfg)
    }

    fn entry(date: &str, hours: f64, desc: &str) -> LogEntry {
        LogEntry {
            name: "alice".into(),
            date: date.into(),
            start_time: "09:00:00".into(),
            end_time: "10:00:00".into(),
            duration_hours: hours,
            description: desc.into(),
        }
    }

    #[test]
    fn header_is_written_exactly_once() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.append(&entry("2025-10-06", 0.5, "a")).unwrap();
        store.append(&entry("2025-10-06", 1.0, "b")).unwrap();
        store.init_if_absent().unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        let headers = text
            .lines()
            .filter(|l| *l == "name,date,start_time,end_time,duration_hours,description")
            .count();
        assert_eq!(headers, 1);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn empty_log_scans_to_nothing() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store.init_if_absent().unwrap();

        let report = store.scan_day("2025-10-06").unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.total_hours, 0.0);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn missing_log_scans_to_nothing() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        let report = store.scan_day("2025-10-06").unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.total_hours, 0.0);
    }

    #[test]
    fn scan_sums_only_the_requested_day() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store.append(&entry("2025-10-06", 0.5, "a")).unwrap();
        store.append(&entry("2025-10-06", 1.25, "b")).unwrap();
        store.append(&entry("2025-10-07", 2.0, "c")).unwrap();
        store.append(&entry("2025-10-06", 0.75, "d")).unwrap();

        let report = store.scan_day("2025-10-06").unwrap();
        assert_eq!(report.rows.len(), 3);
        assert!((report.total_hours - 2.5).abs() < 1e-9);
    }

    #[test]
    fn date_matching_is_whole_field_not_substring() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        // the target date appears in the description of a row from another day
        store
            .append(&entry("2025-10-07", 1.0, "prep for 2025-10-06 review"))
            .unwrap();

        let report = store.scan_day("2025-10-06").unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.total_hours, 0.0);
    }

    #[test]
    fn malformed_rows_are_skipped_with_a_warning() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store.append(&entry("2025-10-06", 0.5, "good")).unwrap();
        // short row and non-numeric duration, appended by hand
        let mut text = fs::read_to_string(store.path()).unwrap();
        text.push_str("broken,row\n");
        text.push_str("alice,2025-10-06,09:00:00,10:00:00,n/a,bad duration\n");
        fs::write(store.path(), text).unwrap();
        store.append(&entry("2025-10-06", 0.25, "after")).unwrap();

        let report = store.scan_day("2025-10-06").unwrap();
        assert_eq!(report.rows.len(), 2);
        assert!((report.total_hours - 0.75).abs() < 1e-9);
        assert_eq!(report.skipped.len(), 2);
    }
}
