//! Timestamps stored in `asset/created` and `asset/modified`.
//!
//! Written as RFC 3339 local time with offset, whole seconds. Read leniently,
//! since other exporters write fractional seconds or omit the offset.
use crate::common::{Error, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, SecondsFormat, Utc};

/// Current wall-clock time in the local offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().into()
}

/// Render a timestamp the way it is written to the document.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parse an ISO 8601 date-time.
///
/// Supports formats like:
/// - 2023-10-10T14:30:00+02:00
/// - 2023-10-10T14:30:00.1234567Z
/// - 2023-10-10T14:30:00 (taken as UTC)
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.fZ", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(DateTime::from_naive_utc_and_offset(dt, Utc.fix()));
        }
    }

    Err(Error::Schema(format!("Invalid date-time: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_format_then_parse() {
        let dt = DateTime::parse_from_rfc3339("2024-02-29T23:59:58+05:30").unwrap();
        let text = format_timestamp(&dt);
        assert_eq!(text, "2024-02-29T23:59:58+05:30");
        assert_eq!(parse_timestamp(&text).unwrap(), dt);
    }

    #[test]
    fn test_parse_lenient_forms() {
        let dt = parse_timestamp("2010-05-03T12:00:00.123456").unwrap();
        assert_eq!(dt.year(), 2010);
        assert_eq!(dt.offset().local_minus_utc(), 0);

        let dt = parse_timestamp("2010-05-03T12:00:00Z").unwrap();
        assert_eq!(dt.hour(), 12);

        let dt = parse_timestamp(" 2010-05-03T12:00:00 ").unwrap();
        assert_eq!(dt.month(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_timestamp("yesterday"), Err(Error::Schema(_))));
    }

    #[test]
    fn test_now_has_second_precision_when_formatted() {
        let text = format_timestamp(&now());
        assert!(!text.contains('.'));
        assert!(parse_timestamp(&text).is_ok());
    }
}
