use chrono::{Datelike, NaiveDate};

use super::date::{days_in_month, first_weekday, month_name};

/// The month currently displayed by a calendar panel.
///
/// `month` is zero-based (0 = January) so navigation is plain modular
/// arithmetic; use [`CalendarCursor::month_number`] when talking to chrono.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarCursor {
    year: i32,
    month: u32,
}

impl CalendarCursor {
    /// Builds a cursor, normalizing any month overflow into the year.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year: year + (month / 12) as i32,
            month: month % 12,
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// One-based month number.
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    pub fn shift(self, months: i32) -> Self {
        let total = self.year * 12 + self.month as i32 + months;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month_number())
    }

    pub fn first_weekday(&self) -> u32 {
        first_weekday(self.year, self.month_number())
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_number(), day)
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month_number()), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing_uses_zero_based_month() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let cursor = CalendarCursor::containing(date);
        assert_eq!(cursor.year(), 2025);
        assert_eq!(cursor.month(), 0);
        assert_eq!(cursor.month_number(), 1);
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let december = CalendarCursor::new(2024, 11);
        assert_eq!(december.next(), CalendarCursor::new(2025, 0));
        assert_eq!(CalendarCursor::new(2025, 0).prev(), december);
        assert_eq!(december.shift(13), CalendarCursor::new(2026, 0));
        assert_eq!(december.shift(-24), CalendarCursor::new(2022, 11));
    }

    #[test]
    fn test_new_normalizes_overflow() {
        assert_eq!(CalendarCursor::new(2024, 12), CalendarCursor::new(2025, 0));
    }

    #[test]
    fn test_title_and_dates() {
        let cursor = CalendarCursor::new(2024, 1);
        assert_eq!(cursor.title(), "February 2024");
        assert_eq!(cursor.days_in_month(), 29);
        assert_eq!(cursor.date(29), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(cursor.date(30), None);
    }
}
