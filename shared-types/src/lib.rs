use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthToken {
    pub token: String,
    pub expires_at: i64, // unix seconds
}

/// A booking request as it leaves the form. Dates are `YYYY-MM-DD`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingInquiry {
    pub city: String,
    pub room_slug: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub guests: u8,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InquiryReceipt {
    pub reference: String,
    pub nights: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Room {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub nightly_rate: u32,
    pub max_guests: u8,
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Amenity {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Testimonial {
    pub author: String,
    pub location: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}
