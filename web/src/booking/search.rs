use chrono::NaiveDate;

use crate::calendar::date::{format_iso_date, parse_optional_iso_date};
use crate::calendar::{PopoverGroup, StayDates, StayField};

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 8;
pub const DEFAULT_GUESTS: u8 = 2;

/// The popovers hanging off the search bar. Only one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPopover {
    City,
    CheckIn,
    CheckOut,
    Guests,
}

impl SearchPopover {
    fn stay_field(self) -> Option<StayField> {
        match self {
            SearchPopover::CheckIn => Some(StayField::CheckIn),
            SearchPopover::CheckOut => Some(StayField::CheckOut),
            SearchPopover::City | SearchPopover::Guests => None,
        }
    }
}

impl From<StayField> for SearchPopover {
    fn from(field: StayField) -> Self {
        match field {
            StayField::CheckIn => SearchPopover::CheckIn,
            StayField::CheckOut => SearchPopover::CheckOut,
        }
    }
}

/// State behind the hero search bar: city, stay dates, guests and which
/// popover is showing.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    city: Option<String>,
    guests: u8,
    stay: StayDates,
    popovers: PopoverGroup<SearchPopover>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            city: None,
            guests: DEFAULT_GUESTS,
            stay: StayDates::new(),
            popovers: PopoverGroup::new(),
        }
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn guests(&self) -> u8 {
        self.guests
    }

    pub fn stay(&self) -> &StayDates {
        &self.stay
    }

    pub fn is_open(&self, popover: SearchPopover) -> bool {
        self.popovers.is_open(popover)
    }

    /// Opens `popover` and closes its siblings. Returns false when the
    /// trigger is inert (check-out before any check-in).
    pub fn open(&mut self, popover: SearchPopover, today: NaiveDate) -> bool {
        match popover.stay_field() {
            Some(field) => {
                if !self.stay.open(field, today) {
                    return false;
                }
            }
            None => self.stay.close_all(),
        }
        self.popovers.open(popover);
        true
    }

    pub fn toggle(&mut self, popover: SearchPopover, today: NaiveDate) -> bool {
        if self.is_open(popover) {
            self.close(popover);
            return false;
        }
        self.open(popover, today)
    }

    pub fn close(&mut self, popover: SearchPopover) {
        if !self.popovers.is_open(popover) {
            return;
        }
        if let Some(field) = popover.stay_field() {
            self.stay.close(field);
        }
        self.popovers.close(popover);
    }

    pub fn close_all(&mut self) {
        self.stay.close_all();
        self.popovers.close_all();
    }

    pub fn select_city(&mut self, city: impl Into<String>) {
        self.city = Some(city.into());
        self.close(SearchPopover::City);
    }

    pub fn select_day(&mut self, field: StayField, date: NaiveDate, today: NaiveDate) -> bool {
        if !self.is_open(field.into()) {
            return false;
        }
        if self.stay.select_day(field, date, today).is_none() {
            return false;
        }
        self.popovers.close(field.into());
        true
    }

    pub fn next_month(&mut self, field: StayField) {
        self.stay.next_month(field);
    }

    pub fn prev_month(&mut self, field: StayField) {
        self.stay.prev_month(field);
    }

    pub fn add_guest(&mut self) {
        self.guests = (self.guests + 1).min(MAX_GUESTS);
    }

    pub fn remove_guest(&mut self) {
        self.guests = self.guests.saturating_sub(1).max(MIN_GUESTS);
    }

    pub fn to_query(&self) -> BookingQuery {
        BookingQuery {
            city: self.city.clone(),
            check_in: self.stay.check_in(),
            check_out: self.stay.check_out(),
            guests: Some(self.guests),
        }
    }
}

/// What the search bar hands to the booking page through the URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingQuery {
    pub city: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u8>,
}

impl BookingQuery {
    /// Reads raw query values; anything unparseable is treated as absent.
    pub fn from_params(
        city: Option<String>,
        check_in: Option<String>,
        check_out: Option<String>,
        guests: Option<String>,
    ) -> Self {
        Self {
            city: city.filter(|c| !c.trim().is_empty()),
            check_in: parse_optional_iso_date(check_in.as_deref()),
            check_out: parse_optional_iso_date(check_out.as_deref()),
            guests: guests
                .and_then(|g| g.parse::<u8>().ok())
                .filter(|g| (MIN_GUESTS..=MAX_GUESTS).contains(g)),
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(city) = &self.city {
            pairs.push(format!("city={}", urlencoding::encode(city)));
        }
        if let Some(date) = self.check_in {
            pairs.push(format!("check_in={}", format_iso_date(date)));
        }
        if let Some(date) = self.check_out {
            pairs.push(format!("check_out={}", format_iso_date(date)));
        }
        if let Some(guests) = self.guests {
            pairs.push(format!("guests={}", guests));
        }
        pairs.join("&")
    }

    pub fn booking_url(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/booking".to_string()
        } else {
            format!("/booking?{}", query)
        }
    }
}
