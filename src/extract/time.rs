//! Calendar date conversion for the CAD data format

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::errors::{ExtractError, ExtractResult};

/// CAD timestamp format, e.g. `1900-Jan-01 00:11`
const CAD_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Date-only fallback, e.g. `1900-Jan-01`
const CAD_DATE_FORMAT: &str = "%Y-%b-%d";

/// Parses a CAD calendar timestamp.
///
/// Accepts the full `YYYY-Mon-DD HH:MM` form and a date-only fallback
/// (taken as midnight).
pub fn parse_cad_time(calendar_date: &str) -> ExtractResult<NaiveDateTime> {
    if let Ok(time) = NaiveDateTime::parse_from_str(calendar_date, CAD_TIME_FORMAT) {
        return Ok(time);
    }
    if let Ok(date) = NaiveDate::parse_from_str(calendar_date, CAD_DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(ExtractError::InvalidTimestamp(calendar_date.to_string()))
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM`
pub fn format_time(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_timestamp() {
        let time = parse_cad_time("1900-Jan-01 00:11").unwrap();
        assert_eq!(format_time(&time), "1900-01-01 00:11");

        let time = parse_cad_time("2020-Mar-02 12:00").unwrap();
        assert_eq!(format_time(&time), "2020-03-02 12:00");
    }

    #[test]
    fn test_parse_date_only_fallback() {
        let time = parse_cad_time("2020-Mar-02").unwrap();
        assert_eq!(format_time(&time), "2020-03-02 00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_cad_time("not a date").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidTimestamp(_)));

        let err = parse_cad_time("2020-03-02 12:00").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidTimestamp(_)));
    }
}
