use chrono::NaiveDate;

use super::cursor::CalendarCursor;
use super::grid::{month_grid, single_mark, GridCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open { cursor: CalendarCursor },
}

/// Visibility and month navigation for one single-date popover.
///
/// The selected value itself lives with the form; [`select_day`] only
/// proposes it back to the caller.
///
/// [`select_day`]: SingleDatePicker::select_day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SingleDatePicker {
    state: PickerState,
}

impl SingleDatePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::Open { .. })
    }

    pub fn cursor(&self) -> Option<CalendarCursor> {
        match self.state {
            PickerState::Open { cursor } => Some(cursor),
            PickerState::Closed => None,
        }
    }

    /// Opens on the selected date's month, falling back to `today`.
    /// Re-opening an open picker keeps its cursor.
    pub fn open(&mut self, selected: Option<NaiveDate>, today: NaiveDate) {
        if self.is_open() {
            return;
        }
        self.state = PickerState::Open {
            cursor: CalendarCursor::containing(selected.unwrap_or(today)),
        };
    }

    pub fn close(&mut self) {
        self.state = PickerState::Closed;
    }

    pub fn next_month(&mut self) {
        if let PickerState::Open { cursor } = &mut self.state {
            *cursor = cursor.next();
        }
    }

    pub fn prev_month(&mut self) {
        if let PickerState::Open { cursor } = &mut self.state {
            *cursor = cursor.prev();
        }
    }

    /// Accepts a day click. Returns the date to emit and closes, or `None`
    /// with no state change when the picker is closed or the day is before
    /// `min_date`.
    pub fn select_day(&mut self, date: NaiveDate, min_date: NaiveDate) -> Option<NaiveDate> {
        if !self.is_open() || date < min_date {
            return None;
        }
        self.close();
        Some(date)
    }

    /// Grid for the displayed month, empty while closed.
    pub fn grid(&self, min_date: NaiveDate, selected: Option<NaiveDate>) -> Vec<GridCell> {
        self.cursor()
            .map(|cursor| month_grid(cursor, Some(min_date), single_mark(selected)))
            .unwrap_or_default()
    }
}
