//! Time utilities: ISO-8601 wall-clock timestamps, duration computation and
//! fixed-point hour formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};

/// Timestamp format used in the session record: local wall clock, second
/// precision, no zone suffix.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_iso(t: NaiveDateTime) -> String {
    t.format(ISO_FORMAT).to_string()
}

pub fn parse_iso(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, ISO_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Hours between start and end, clamped at zero and rounded half-up to two
/// decimals. A clock that went backwards yields 0.00.
pub fn duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let secs = (end - start).num_seconds().max(0);
    round_hours(secs as f64 / 3600.0)
}

/// Half-up rounding to two decimal places.
pub fn round_hours(h: f64) -> f64 {
    (h * 100.0).round() / 100.0
}

/// Fixed-point rendering with exactly two fractional digits.
pub fn format_hours(h: f64) -> String {
    format!("{:.2}", h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(s: &str) -> NaiveDateTime {
        parse_iso(s).unwrap()
    }

    #[test]
    fn iso_round_trip() {
        let t = NaiveDate::from_ymd_opt(2025, 10, 6)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap();
        assert_eq!(format_iso(t), "2025-10-06T09:30:15");
        assert_eq!(parse_iso("2025-10-06T09:30:15").unwrap(), t);
    }

    #[test]
    fn rejects_zoned_or_garbage_timestamps() {
        assert!(parse_iso("2025-10-06T09:30:15Z").is_err());
        assert!(parse_iso("not a time").is_err());
    }

    #[test]
    fn duration_rounds_half_up() {
        // 18 s = 0.005 h, exactly on the rounding boundary
        let h = duration_hours(dt("2025-10-06T09:00:00"), dt("2025-10-06T09:00:18"));
        assert_eq!(h, 0.01);
        // one second short of the boundary rounds down
        let h = duration_hours(dt("2025-10-06T09:00:00"), dt("2025-10-06T09:00:17"));
        assert_eq!(h, 0.0);
    }

    #[test]
    fn duration_clamps_backwards_clock() {
        let h = duration_hours(dt("2025-10-06T10:00:00"), dt("2025-10-06T09:00:00"));
        assert_eq!(h, 0.0);
    }

    #[test]
    fn whole_session_duration() {
        let h = duration_hours(dt("2025-10-06T09:00:00"), dt("2025-10-06T17:30:00"));
        assert_eq!(h, 8.5);
        assert_eq!(format_hours(h), "8.50");
    }
}
