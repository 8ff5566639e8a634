//! Date helper functions

use chrono::{DateTime, FixedOffset};

/// Timestamp layout used by the content API, e.g. `2006-01-02T15:04:05-07:00`
pub const API_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Long calendar layout, e.g. `02 January 2006`
pub const HUMAN_DATE_FORMAT: &str = "%d %B %Y";

/// Parse a content API timestamp, keeping its UTC offset
pub fn parse_api_date(date: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(date, API_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(date))
        .ok()
}

/// Format a content API timestamp as a long calendar date
///
/// Unparseable input yields an empty string rather than an error.
///
/// # Examples
/// ```ignore
/// human_date("2023-04-01T10:00:00+00:00") // -> "01 April 2023"
/// ```
pub fn human_date(date: &str) -> String {
    match parse_api_date(date) {
        Some(parsed) => parsed.format(HUMAN_DATE_FORMAT).to_string(),
        None => {
            tracing::debug!("Unparseable date {:?}", date);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_date() {
        assert_eq!(human_date("2023-04-01T10:00:00+00:00"), "01 April 2023");
        assert_eq!(human_date("2006-01-02T15:04:05-07:00"), "02 January 2006");
    }

    #[test]
    fn test_human_date_keeps_offset_day() {
        // 23:30 at -05:00 is already the next day in UTC; the local day is shown
        assert_eq!(human_date("2023-12-31T23:30:00-05:00"), "31 December 2023");
    }

    #[test]
    fn test_human_date_accepts_rfc3339_variants() {
        assert_eq!(human_date("2023-04-01T10:00:00.250Z"), "01 April 2023");
    }

    #[test]
    fn test_unparseable_date_is_empty() {
        assert_eq!(human_date("not-a-date"), "");
        assert_eq!(human_date(""), "");
        assert_eq!(human_date("2023-04-01"), "");
    }
}
