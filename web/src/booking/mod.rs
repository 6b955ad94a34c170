pub mod inquiry;
pub mod search;

pub use inquiry::{compose_inquiry, inquiry_reference, validate_inquiry, InquiryError, ValidatedStay};
pub use search::{BookingQuery, SearchForm, SearchPopover};
