use chrono::NaiveDate;
use shared_types::BookingInquiry;
use thiserror::Error;

use super::search::{MAX_GUESTS, MIN_GUESTS};
use crate::calendar::date::{format_iso_date, nights_between, parse_iso_date, DateParseError};
use crate::calendar::RangeSelection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    #[error("Please choose a city")]
    MissingCity,
    #[error("Please choose your check-in and check-out dates")]
    MissingDates,
    #[error("Invalid {field} date: {source}")]
    InvalidDate {
        field: &'static str,
        source: DateParseError,
    },
    #[error("Check-in cannot be in the past")]
    CheckInInPast,
    #[error("Check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
    #[error("Guests must be between 1 and 8, got {0}")]
    GuestsOutOfRange(u8),
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Dates of an inquiry that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedStay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
}

/// Builds the payload handed to the booking backend from the form's values.
/// `SH-<check-in as YYYYMMDD>-<six digit sequence>`.
pub fn inquiry_reference(check_in: NaiveDate, sequence: i64) -> String {
    format!(
        "SH-{}-{:06}",
        check_in.format("%Y%m%d"),
        sequence.rem_euclid(1_000_000)
    )
}

pub fn compose_inquiry(
    city: &str,
    room_slug: Option<String>,
    selection: RangeSelection,
    guests: u8,
    name: &str,
    email: &str,
) -> Result<BookingInquiry, InquiryError> {
    let (Some(start), Some(end)) = (selection.start(), selection.end()) else {
        return Err(InquiryError::MissingDates);
    };
    if start == end {
        return Err(InquiryError::CheckOutNotAfterCheckIn);
    }
    Ok(BookingInquiry {
        city: city.trim().to_string(),
        room_slug,
        check_in: format_iso_date(start),
        check_out: format_iso_date(end),
        guests,
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    })
}

/// Checks an inquiry received at the server boundary.
pub fn validate_inquiry(
    inquiry: &BookingInquiry,
    today: NaiveDate,
) -> Result<ValidatedStay, InquiryError> {
    if inquiry.city.trim().is_empty() {
        return Err(InquiryError::MissingCity);
    }
    let check_in = parse_iso_date(&inquiry.check_in).map_err(|source| InquiryError::InvalidDate {
        field: "check-in",
        source,
    })?;
    let check_out =
        parse_iso_date(&inquiry.check_out).map_err(|source| InquiryError::InvalidDate {
            field: "check-out",
            source,
        })?;
    if check_in < today {
        return Err(InquiryError::CheckInInPast);
    }
    if check_out <= check_in {
        return Err(InquiryError::CheckOutNotAfterCheckIn);
    }
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&inquiry.guests) {
        return Err(InquiryError::GuestsOutOfRange(inquiry.guests));
    }
    if inquiry.name.trim().is_empty() {
        return Err(InquiryError::MissingName);
    }
    if !looks_like_email(&inquiry.email) {
        return Err(InquiryError::InvalidEmail);
    }

    Ok(ValidatedStay {
        check_in,
        check_out,
        nights: nights_between(check_in, check_out),
    })
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn inquiry() -> BookingInquiry {
        BookingInquiry {
            city: "Lisbon".to_string(),
            room_slug: Some("harbour-suite".to_string()),
            check_in: "2025-12-30".to_string(),
            check_out: "2026-01-02".to_string(),
            guests: 2,
            name: "Ana Reis".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_inquiry_across_new_year() {
        let stay = validate_inquiry(&inquiry(), ymd(2025, 12, 1)).unwrap();
        assert_eq!(stay.check_in, ymd(2025, 12, 30));
        assert_eq!(stay.check_out, ymd(2026, 1, 2));
        assert_eq!(stay.nights, 3);
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let mut bad = inquiry();
        bad.check_out = "2025-12-30".to_string();
        assert_eq!(
            validate_inquiry(&bad, ymd(2025, 12, 1)),
            Err(InquiryError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn test_rejects_past_check_in() {
        assert_eq!(
            validate_inquiry(&inquiry(), ymd(2025, 12, 31)),
            Err(InquiryError::CheckInInPast)
        );
    }

    #[test]
    fn test_rejects_malformed_date() {
        let mut bad = inquiry();
        bad.check_in = "12/30/2025".to_string();
        assert!(matches!(
            validate_inquiry(&bad, ymd(2025, 12, 1)),
            Err(InquiryError::InvalidDate { field: "check-in", .. })
        ));
    }

    #[test]
    fn test_rejects_guest_count_and_contact() {
        let today = ymd(2025, 12, 1);

        let mut bad = inquiry();
        bad.guests = 0;
        assert_eq!(validate_inquiry(&bad, today), Err(InquiryError::GuestsOutOfRange(0)));

        let mut bad = inquiry();
        bad.name = "   ".to_string();
        assert_eq!(validate_inquiry(&bad, today), Err(InquiryError::MissingName));

        for email in ["", "ana", "@example.com", "ana@", "ana@example", "a@b@c.com"] {
            let mut bad = inquiry();
            bad.email = email.to_string();
            assert_eq!(validate_inquiry(&bad, today), Err(InquiryError::InvalidEmail), "{email}");
        }

        let mut bad = inquiry();
        bad.city = String::new();
        assert_eq!(validate_inquiry(&bad, today), Err(InquiryError::MissingCity));
    }

    #[test]
    fn test_compose_from_range_selection() {
        let mut selection = RangeSelection::new();
        assert_eq!(
            compose_inquiry("Lisbon", None, selection, 2, "Ana", "ana@example.com"),
            Err(InquiryError::MissingDates)
        );

        selection.click(ymd(2026, 1, 2));
        selection.click(ymd(2025, 12, 30));
        let composed =
            compose_inquiry(" Lisbon ", None, selection, 2, " Ana ", "ana@example.com").unwrap();
        assert_eq!(composed.check_in, "2025-12-30");
        assert_eq!(composed.check_out, "2026-01-02");
        assert_eq!(composed.city, "Lisbon");
        assert_eq!(composed.name, "Ana");
    }

    #[test]
    fn test_compose_rejects_single_day_range() {
        let mut selection = RangeSelection::new();
        selection.click(ymd(2026, 1, 2));
        selection.click(ymd(2026, 1, 2));
        assert_eq!(
            compose_inquiry("Lisbon", None, selection, 2, "Ana", "ana@example.com"),
            Err(InquiryError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn test_inquiry_reference_is_zero_padded() {
        let check_in = ymd(2025, 6, 1);
        assert_eq!(inquiry_reference(check_in, 42), "SH-20250601-000042");
        assert_eq!(inquiry_reference(check_in, 1_234_567_890), "SH-20250601-567890");
    }
}
