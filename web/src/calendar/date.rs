use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

/// Wire format for dates at every form, URL and server function boundary.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date is empty")]
    Empty,
    #[error("'{0}' is not a YYYY-MM-DD date")]
    Malformed(String),
}

/// Today's calendar day in the visitor's local timezone, truncated to midnight.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    // chrono accepts unpadded fields, the boundary format does not
    if trimmed.len() != 10 {
        return Err(DateParseError::Malformed(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| DateParseError::Malformed(trimmed.to_string()))
}

/// Lenient variant for query strings: anything unparseable counts as absent.
pub fn parse_optional_iso_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|value| parse_iso_date(value).ok())
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// `month` is 1-based here, matching chrono.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Weekday of the first of the month, 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Nights between two dates, never less than one.
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(1)
}

/// `month` is 1-based.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// "Mar 14, 2025" style label used on trigger buttons.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_trip_across_dst_start() {
        let date = ymd(2024, 3, 10);
        let text = format_iso_date(date);
        assert_eq!(text, "2024-03-10");
        assert_eq!(parse_iso_date(&text), Ok(date));
    }

    #[test]
    fn test_round_trip_across_dst_end() {
        let date = ymd(2024, 11, 3);
        assert_eq!(parse_iso_date(&format_iso_date(date)), Ok(date));
    }

    #[test]
    fn test_round_trip_year_rollover() {
        let date = ymd(2024, 12, 31);
        let text = format_iso_date(date);
        assert_eq!(text, "2024-12-31");
        let parsed = parse_iso_date(&text).unwrap();
        assert_eq!(parsed, date);
        assert_eq!(next_day(parsed), ymd(2025, 1, 1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_iso_date(""), Err(DateParseError::Empty));
        assert_eq!(parse_iso_date("   "), Err(DateParseError::Empty));
        assert!(matches!(
            parse_iso_date("2024-2-3"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_iso_date("2024-02-30"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_iso_date("2024-02-03T00:00:00"),
            Err(DateParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_optional_treats_invalid_as_absent() {
        assert_eq!(parse_optional_iso_date(None), None);
        assert_eq!(parse_optional_iso_date(Some("nope")), None);
        assert_eq!(
            parse_optional_iso_date(Some("2025-07-04")),
            Some(ymd(2025, 7, 4))
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_first_weekday_sunday_based() {
        // 2024-09-01 was a Sunday, 2025-01-01 a Wednesday
        assert_eq!(first_weekday(2024, 9), 0);
        assert_eq!(first_weekday(2025, 1), 3);
        assert_eq!(first_weekday(2024, 6), 6);
    }

    #[test]
    fn test_nights_minimum_one() {
        let day = ymd(2025, 5, 1);
        assert_eq!(nights_between(day, day), 1);
        assert_eq!(nights_between(day, ymd(2025, 5, 4)), 3);
        assert_eq!(nights_between(ymd(2024, 12, 30), ymd(2025, 1, 2)), 3);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "Unknown");
        assert_eq!(month_name(13), "Unknown");
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(ymd(2025, 3, 4)), "Mar 4, 2025");
    }
}
