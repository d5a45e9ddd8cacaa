/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Formats of a `<input type="datetime-local">` value
const DATETIME_LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
///
/// Unparseable input is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    match parse_datetime_local(datetime_str) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => datetime_str.to_string(),
    }
}

/// Parses a value produced by a `datetime-local` input (seconds optional)
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
        assert_eq!(format_datetime("2024-05-01T09:30"), "01.05.2024 09:30:00");
    }

    #[test]
    fn test_parse_datetime_local() {
        assert!(parse_datetime_local("2024-05-01T09:30").is_some());
        assert!(parse_datetime_local("2024-05-01T09:30:15").is_some());
        assert!(parse_datetime_local("01/05/2024").is_none());
        assert!(parse_datetime_local("").is_none());
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
