use chrono::NaiveDate;

use super::cursor::CalendarCursor;
use super::date::nights_between;
use super::grid::{month_grid, DayMark, GridCell};
use super::positioning::PlacementPolicy;

/// A stay span picked on the range calendar.
///
/// `end` is never set without `start`, and `start <= end` whenever both are
/// set; [`RangeSelection::click`] is the only way to build a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Applies a day click:
    /// - empty or complete ranges restart at `date`
    /// - a half-open range closes, swapping if `date` precedes the start
    pub fn click(&mut self, date: NaiveDate) {
        *self = match (self.start, self.end) {
            (Some(start), None) if date < start => Self {
                start: Some(date),
                end: Some(start),
            },
            (Some(start), None) => Self {
                start: Some(start),
                end: Some(date),
            },
            _ => Self {
                start: Some(date),
                end: None,
            },
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn nights(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(nights_between(start, end)),
            _ => None,
        }
    }

    pub fn mark(&self, date: NaiveDate) -> DayMark {
        if self.start == Some(date) || self.end == Some(date) {
            return DayMark::Selected;
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) if start < date && date < end => DayMark::InRange,
            _ => DayMark::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangePickerOptions {
    pub placement: PlacementPolicy,
}

/// Two-month range calendar: visibility, the left panel's month and the
/// in-progress selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeDatePicker {
    open: bool,
    cursor: CalendarCursor,
    selection: RangeSelection,
    min_date: NaiveDate,
    options: RangePickerOptions,
}

impl RangeDatePicker {
    pub fn new(min_date: NaiveDate, options: RangePickerOptions) -> Self {
        Self {
            open: false,
            cursor: CalendarCursor::containing(min_date),
            selection: RangeSelection::new(),
            min_date,
            options,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn options(&self) -> RangePickerOptions {
        self.options
    }

    pub fn selection(&self) -> RangeSelection {
        self.selection
    }

    /// Opens with the form's current selection, showing its start month (or
    /// the min date's month when nothing is selected).
    pub fn open(&mut self, current: RangeSelection, min_date: NaiveDate) {
        if self.open {
            return;
        }
        self.open = true;
        self.min_date = min_date;
        self.selection = current;
        self.cursor = CalendarCursor::containing(current.start().unwrap_or(min_date));
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next_month(&mut self) {
        if self.open {
            self.cursor = self.cursor.next();
        }
    }

    pub fn prev_month(&mut self) {
        if self.open {
            self.cursor = self.cursor.prev();
        }
    }

    /// Left and right panel months; the right one is always the month after.
    pub fn panels(&self) -> (CalendarCursor, CalendarCursor) {
        (self.cursor, self.cursor.next())
    }

    /// Returns whether the click changed the selection.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        if !self.open || date < self.min_date {
            return false;
        }
        self.selection.click(date);
        true
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Ends the gesture: closes and hands back the selection to emit.
    /// Returns `None` when the picker was not open, so one gesture emits once.
    pub fn confirm(&mut self) -> Option<RangeSelection> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.selection)
    }

    pub fn grids(&self) -> (Vec<GridCell>, Vec<GridCell>) {
        let (left, right) = self.panels();
        let selection = self.selection;
        let mark = move |date| selection.mark(date);
        (
            month_grid(left, Some(self.min_date), mark),
            month_grid(right, Some(self.min_date), mark),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_picker(min: NaiveDate) -> RangeDatePicker {
        let mut picker = RangeDatePicker::new(min, RangePickerOptions::default());
        picker.open(RangeSelection::new(), min);
        picker
    }

    #[test]
    fn test_click_twenty_then_ten_swaps() {
        let mut picker = open_picker(ymd(2025, 8, 1));
        assert!(picker.select_day(ymd(2025, 8, 20)));
        assert_eq!(picker.selection().start(), Some(ymd(2025, 8, 20)));
        assert_eq!(picker.selection().end(), None);

        assert!(picker.select_day(ymd(2025, 8, 10)));
        assert_eq!(picker.selection().start(), Some(ymd(2025, 8, 10)));
        assert_eq!(picker.selection().end(), Some(ymd(2025, 8, 20)));
        assert_eq!(picker.selection().nights(), Some(10));
    }

    #[test]
    fn test_complete_range_restarts_on_next_click() {
        let mut selection = RangeSelection::new();
        selection.click(ymd(2025, 8, 10));
        selection.click(ymd(2025, 8, 12));
        selection.click(ymd(2025, 8, 30));
        assert_eq!(selection.start(), Some(ymd(2025, 8, 30)));
        assert_eq!(selection.end(), None);
    }

    #[test]
    fn test_same_day_twice_is_one_night() {
        let mut selection = RangeSelection::new();
        selection.click(ymd(2025, 8, 10));
        selection.click(ymd(2025, 8, 10));
        assert!(selection.is_complete());
        assert_eq!(selection.nights(), Some(1));
    }

    #[test]
    fn test_reset_clears() {
        let mut picker = open_picker(ymd(2025, 8, 1));
        picker.select_day(ymd(2025, 8, 5));
        picker.reset();
        assert_eq!(picker.selection(), RangeSelection::new());
        assert!(picker.is_open());
    }

    #[test]
    fn test_day_before_min_is_ignored() {
        let mut picker = open_picker(ymd(2025, 8, 12));
        let before = picker;
        assert!(!picker.select_day(ymd(2025, 8, 11)));
        assert_eq!(picker, before);
    }

    #[test]
    fn test_closed_picker_ignores_clicks() {
        let mut picker = RangeDatePicker::new(ymd(2025, 8, 1), RangePickerOptions::default());
        assert!(!picker.select_day(ymd(2025, 8, 5)));
        assert_eq!(picker.selection(), RangeSelection::new());
    }

    #[test]
    fn test_marks_endpoints_and_interior() {
        let mut selection = RangeSelection::new();
        selection.click(ymd(2025, 8, 10));
        selection.click(ymd(2025, 8, 13));
        assert_eq!(selection.mark(ymd(2025, 8, 9)), DayMark::Plain);
        assert_eq!(selection.mark(ymd(2025, 8, 10)), DayMark::Selected);
        assert_eq!(selection.mark(ymd(2025, 8, 11)), DayMark::InRange);
        assert_eq!(selection.mark(ymd(2025, 8, 12)), DayMark::InRange);
        assert_eq!(selection.mark(ymd(2025, 8, 13)), DayMark::Selected);
        assert_eq!(selection.mark(ymd(2025, 8, 14)), DayMark::Plain);
    }

    #[test]
    fn test_panels_roll_over_year() {
        let mut picker = open_picker(ymd(2025, 11, 20));
        let (left, right) = picker.panels();
        assert_eq!((left.year(), left.month()), (2025, 10));
        assert_eq!((right.year(), right.month()), (2025, 11));

        picker.next_month();
        let (left, right) = picker.panels();
        assert_eq!((left.year(), left.month()), (2025, 11));
        assert_eq!((right.year(), right.month()), (2026, 0));
    }

    #[test]
    fn test_range_highlight_spans_both_panels() {
        let mut picker = open_picker(ymd(2025, 1, 1));
        picker.select_day(ymd(2025, 1, 30));
        picker.select_day(ymd(2025, 2, 2));
        let (left, right) = picker.grids();
        let in_range: Vec<_> = left
            .iter()
            .chain(right.iter())
            .filter_map(GridCell::day)
            .filter(|c| c.is_in_range())
            .map(|c| c.date)
            .collect();
        assert_eq!(in_range, vec![ymd(2025, 1, 31), ymd(2025, 2, 1)]);
    }

    #[test]
    fn test_confirm_emits_once_and_closes() {
        let mut picker = open_picker(ymd(2025, 8, 1));
        picker.select_day(ymd(2025, 8, 3));
        picker.select_day(ymd(2025, 8, 6));
        let emitted = picker.confirm();
        assert_eq!(emitted.and_then(|s| s.nights()), Some(3));
        assert!(!picker.is_open());
        assert_eq!(picker.confirm(), None);
    }

    #[test]
    fn test_open_starts_on_selection_month() {
        let mut current = RangeSelection::new();
        current.click(ymd(2025, 10, 4));
        let mut picker = RangeDatePicker::new(ymd(2025, 8, 1), RangePickerOptions::default());
        picker.open(current, ymd(2025, 8, 1));
        assert_eq!(picker.panels().0.month_number(), 10);
        assert_eq!(picker.selection(), current);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut picker = RangeDatePicker::new(ymd(2025, 8, 1), RangePickerOptions::default());
        let closed = picker;
        picker.close();
        assert_eq!(picker, closed);
    }

    proptest! {
        #[test]
        fn prop_two_clicks_are_ordered(a in 0i64..2000, b in 0i64..2000) {
            let base = ymd(2024, 1, 1);
            let first = base + chrono::Duration::days(a);
            let second = base + chrono::Duration::days(b);

            let mut selection = RangeSelection::new();
            selection.click(first);
            selection.click(second);

            prop_assert_eq!(selection.start(), Some(first.min(second)));
            prop_assert_eq!(selection.end(), Some(first.max(second)));
        }
    }
}
