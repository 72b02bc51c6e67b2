//! One completed session as it appears in the CSV log.

use crate::utils::{text, time};

/// Column order of `time_logs.csv`.
pub const LOG_HEADER: [&str; 6] = [
    "name",
    "date",
    "start_time",
    "end_time",
    "duration_hours",
    "description",
];

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub name: String,
    /// Local date at stop time, `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM:SS`
    pub start_time: String,
    /// `HH:MM:SS`
    pub end_time: String,
    /// Non-negative, two-decimal hours.
    pub duration_hours: f64,
    pub description: String,
}

impl LogEntry {
    /// Render the six CSV fields, re-sanitizing text fields so a row can
    /// never grow or lose columns.
    pub fn to_fields(&self) -> [String; 6] {
        [
            text::sanitize_csv_field(&self.name),
            self.date.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
            time::format_hours(self.duration_hours),
            text::sanitize_csv_field(&self.description),
        ]
    }

    /// Parse one data row. Returns a reason string on shape violations so
    /// the scanner can warn and keep going.
    pub fn from_fields(fields: &[&str]) -> Result<LogEntry, String> {
        if fields.len() != 6 {
            return Err(format!("expected 6 fields, found {}", fields.len()));
        }
        let duration_hours: f64 = fields[4]
            .trim()
            .parse()
            .map_err(|_| format!("non-numeric duration_hours: {:?}", fields[4]))?;
        Ok(LogEntry {
            name: fields[0].to_string(),
            date: fields[1].to_string(),
            start_time: fields[2].to_string(),
            end_time: fields[3].to_string(),
            duration_hours,
            description: fields[5].to_string(),
        })
    }
}
