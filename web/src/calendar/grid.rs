use chrono::NaiveDate;

use super::cursor::CalendarCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayMark {
    #[default]
    Plain,
    /// The selected day, or a range endpoint.
    Selected,
    /// Strictly inside a selected range.
    InRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub disabled: bool,
    pub mark: DayMark,
}

impl DayCell {
    pub fn is_selected(&self) -> bool {
        self.mark == DayMark::Selected
    }

    pub fn is_in_range(&self) -> bool {
        self.mark == DayMark::InRange
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(cell) => Some(cell),
        }
    }
}

/// Lays out one month: blanks up to the first weekday (Sunday first), then
/// one cell per day. Days before `min_date` are disabled.
pub fn month_grid(
    cursor: CalendarCursor,
    min_date: Option<NaiveDate>,
    mark: impl Fn(NaiveDate) -> DayMark,
) -> Vec<GridCell> {
    let leading = cursor.first_weekday() as usize;
    let days = cursor.days_in_month();

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(GridCell::Blank).take(leading));
    cells.extend((1..=days).filter_map(|day| cursor.date(day)).map(|date| {
        GridCell::Day(DayCell {
            date,
            disabled: min_date.is_some_and(|min| date < min),
            mark: mark(date),
        })
    }));
    cells
}

/// Mark function for a single selected date.
pub fn single_mark(selected: Option<NaiveDate>) -> impl Fn(NaiveDate) -> DayMark {
    move |date| {
        if selected == Some(date) {
            DayMark::Selected
        } else {
            DayMark::Plain
        }
    }
}
