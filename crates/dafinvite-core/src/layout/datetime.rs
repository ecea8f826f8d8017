//! Presentational date/time formatting for the `datetime` element.

use chrono::{NaiveDate, NaiveTime};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DATE_OUTPUT_FORMAT: &str = "%A, %B %-d, %Y";
const TIME_OUTPUT_FORMAT: &str = "%-I:%M %p";

/// Format an event date and time as
/// `"<Weekday>, <Month> <day>, <year> at <h>:<mm> <AM|PM>"`.
///
/// Returns an empty string when `date` is empty. An empty or unparseable
/// `time` yields the date part alone; an unparseable `date` is returned
/// trimmed and otherwise untouched.
pub fn format_event_date_time(date: &str, time: &str) -> String {
    let date = date.trim();
    if date.is_empty() {
        return String::new();
    }

    let Ok(parsed_date) = NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT) else {
        return date.to_string();
    };
    let date_part = parsed_date.format(DATE_OUTPUT_FORMAT).to_string();

    match parse_time(time) {
        Some(parsed_time) => format!("{} at {}", date_part, parsed_time.format(TIME_OUTPUT_FORMAT)),
        None => date_part,
    }
}

/// Parse `HH:MM` or `HH:MM:SS`.
fn parse_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    if time.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_afternoon() {
        assert_eq!(
            format_event_date_time("2025-07-04", "14:30"),
            "Friday, July 4, 2025 at 2:30 PM"
        );
    }

    #[test]
    fn test_morning_and_midnight() {
        assert_eq!(
            format_event_date_time("2024-11-10", "09:05"),
            "Sunday, November 10, 2024 at 9:05 AM"
        );
        assert_eq!(
            format_event_date_time("2025-01-01", "00:00"),
            "Wednesday, January 1, 2025 at 12:00 AM"
        );
        assert_eq!(
            format_event_date_time("2025-01-01", "12:00:00"),
            "Wednesday, January 1, 2025 at 12:00 PM"
        );
    }

    #[test]
    fn test_empty_date() {
        assert_eq!(format_event_date_time("", "14:30"), "");
        assert_eq!(format_event_date_time("   ", ""), "");
    }

    #[test]
    fn test_missing_or_bad_time() {
        assert_eq!(format_event_date_time("2025-07-04", ""), "Friday, July 4, 2025");
        assert_eq!(format_event_date_time("2025-07-04", "noon"), "Friday, July 4, 2025");
    }

    #[test]
    fn test_bad_date() {
        assert_eq!(format_event_date_time(" next Friday ", "14:30"), "next Friday");
        assert_eq!(format_event_date_time("2025-02-30", "14:30"), "2025-02-30");
    }
}
