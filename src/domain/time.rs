//! Calendar ↔ epoch-second conversions used on the wire.
//!
//! Both directions measure against a naive 1970-01-01T00:00:00 origin, so a
//! formatted timestamp parses back to the same second regardless of the host
//! time zone. Fractional seconds are floored.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse calendar text into whole seconds since 1970-01-01T00:00:00.
///
/// Returns `None` for text that does not parse; callers treat that as "no
/// timestamp" rather than an error, so a malformed value silently drops the
/// field instead of failing the whole operation.
pub fn to_epoch_seconds(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    parse_calendar(text).map(|datetime| datetime.and_utc().timestamp())
}

/// Convert epoch seconds back to a calendar date/time.
///
/// Values at or below zero are treated as "not set" and yield `None`; the
/// remote service uses `0` for timestamps that have not happened yet.
pub fn from_epoch_seconds(value: i64) -> Option<NaiveDateTime> {
    if value <= 0 {
        return None;
    }
    DateTime::from_timestamp(value, 0).map(|datetime| datetime.naive_utc())
}

fn parse_calendar(text: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_calendar_shapes() {
        assert_eq!(to_epoch_seconds("1970-01-01 00:01:00"), Some(60));
        assert_eq!(to_epoch_seconds("1970-01-01T00:01:00"), Some(60));
        assert_eq!(to_epoch_seconds("1970-01-02"), Some(86400));
        assert_eq!(to_epoch_seconds("01/02/1970"), Some(86400));
        assert_eq!(to_epoch_seconds("01/02/1970 00:00:30"), Some(86430));
        assert_eq!(to_epoch_seconds(" 1970-01-01 00:01 "), Some(60));
    }

    #[test]
    fn fractional_seconds_are_floored() {
        assert_eq!(to_epoch_seconds("1970-01-01 00:01:00.999"), Some(60));
    }

    #[test]
    fn unparsable_text_is_absent_not_an_error() {
        assert_eq!(to_epoch_seconds("not a date"), None);
        assert_eq!(to_epoch_seconds(""), None);
        assert_eq!(to_epoch_seconds("   "), None);
        assert_eq!(to_epoch_seconds("1970-13-40"), None);
    }

    #[test]
    fn non_positive_epochs_are_absent() {
        assert_eq!(from_epoch_seconds(0), None);
        assert_eq!(from_epoch_seconds(-5), None);
    }

    #[test]
    fn epoch_round_trips_through_formatting() {
        for value in [1_i64, 60, 86400, 1_700_000_000] {
            let datetime = from_epoch_seconds(value).unwrap();
            let formatted = datetime.format("%Y-%m-%d %H:%M:%S").to_string();
            assert_eq!(to_epoch_seconds(&formatted), Some(value));
        }
    }
}
