use chrono::NaiveDate;

use super::date::{next_day, nights_between};
use super::single::SingleDatePicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayField {
    CheckIn,
    CheckOut,
}

/// Check-in and check-out chosen through two single-date pickers.
///
/// The check-out minimum is derived from the current check-in on every call,
/// and only one of the two pickers is ever open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StayDates {
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    check_in_picker: SingleDatePicker,
    check_out_picker: SingleDatePicker,
}

impl StayDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills from untrusted input (a query string). Dates that violate
    /// the minimums are dropped rather than corrected.
    pub fn prefilled(
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let check_in = check_in.filter(|date| *date >= today);
        let check_out = check_in.and(check_out).filter(|date| {
            check_in.is_some_and(|start| *date > start)
        });
        Self {
            check_in,
            check_out,
            ..Self::default()
        }
    }

    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    pub fn picker(&self, field: StayField) -> &SingleDatePicker {
        match field {
            StayField::CheckIn => &self.check_in_picker,
            StayField::CheckOut => &self.check_out_picker,
        }
    }

    fn picker_mut(&mut self, field: StayField) -> &mut SingleDatePicker {
        match field {
            StayField::CheckIn => &mut self.check_in_picker,
            StayField::CheckOut => &mut self.check_out_picker,
        }
    }

    pub fn value(&self, field: StayField) -> Option<NaiveDate> {
        match field {
            StayField::CheckIn => self.check_in,
            StayField::CheckOut => self.check_out,
        }
    }

    pub fn min_date(&self, field: StayField, today: NaiveDate) -> NaiveDate {
        match field {
            StayField::CheckIn => today,
            StayField::CheckOut => self.check_in.map(next_day).unwrap_or(today),
        }
    }

    pub fn is_open(&self, field: StayField) -> bool {
        self.picker(field).is_open()
    }

    /// The check-out trigger is inert until a check-in exists. Returns
    /// whether the picker is open afterwards.
    pub fn open(&mut self, field: StayField, today: NaiveDate) -> bool {
        if field == StayField::CheckOut && self.check_in.is_none() {
            return false;
        }
        let other = match field {
            StayField::CheckIn => StayField::CheckOut,
            StayField::CheckOut => StayField::CheckIn,
        };
        self.picker_mut(other).close();

        let anchor = self
            .value(field)
            .or_else(|| (field == StayField::CheckOut).then(|| self.min_date(field, today)));
        self.picker_mut(field).open(anchor, today);
        true
    }

    pub fn close(&mut self, field: StayField) {
        self.picker_mut(field).close();
    }

    pub fn close_all(&mut self) {
        self.check_in_picker.close();
        self.check_out_picker.close();
    }

    pub fn next_month(&mut self, field: StayField) {
        self.picker_mut(field).next_month();
    }

    pub fn prev_month(&mut self, field: StayField) {
        self.picker_mut(field).prev_month();
    }

    /// Routes a day click to the picker. Returns the accepted date, or
    /// `None` when the click was ignored.
    pub fn select_day(
        &mut self,
        field: StayField,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        let min_date = self.min_date(field, today);
        let accepted = self.picker_mut(field).select_day(date, min_date)?;
        match field {
            StayField::CheckIn => {
                self.check_in = Some(accepted);
                if self.check_out.is_some_and(|out| out <= accepted) {
                    self.check_out = None;
                }
            }
            StayField::CheckOut => self.check_out = Some(accepted),
        }
        Some(accepted)
    }

    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) => Some(nights_between(start, end)),
            _ => None,
        }
    }
}
