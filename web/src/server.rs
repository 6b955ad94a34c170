use leptos::prelude::*;
use leptos::server;
use shared_types::{AdminCredentials, AuthToken, BookingInquiry, InquiryReceipt};

#[cfg(feature = "ssr")]
use crate::admin_auth::{AuthError, Authenticator, ConfiguredAuthenticator};
#[cfg(feature = "ssr")]
use crate::booking::{inquiry_reference, validate_inquiry};
#[cfg(feature = "ssr")]
use crate::calendar::date::today;
#[cfg(feature = "ssr")]
use crate::config::get_config;
#[cfg(feature = "ssr")]
use chrono::Utc;

#[cfg(feature = "ssr")]
fn authenticator() -> Result<ConfiguredAuthenticator, ServerFnError> {
    let config = get_config().map_err(|e| {
        tracing::error!("Admin auth unavailable: {}", e);
        ServerFnError::new("Sign in is temporarily unavailable".to_string())
    })?;
    Ok(ConfiguredAuthenticator::new(config))
}

#[server]
pub async fn admin_login(credentials: AdminCredentials) -> Result<AuthToken, ServerFnError> {
    let authenticator = authenticator()?;
    match authenticator.authenticate(&credentials) {
        Ok(token) => {
            tracing::info!(email = %credentials.email, "Admin signed in");
            Ok(token)
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(email = %credentials.email, "Rejected admin sign in");
            Err(ServerFnError::new(AuthError::InvalidCredentials.to_string()))
        }
        Err(e) => {
            tracing::error!("Admin sign in failed: {}", e);
            Err(ServerFnError::new("Sign in failed, please try again".to_string()))
        }
    }
}

#[server]
pub async fn verify_admin_token(token: String) -> Result<bool, ServerFnError> {
    let authenticator = authenticator()?;
    match authenticator.verify(&token) {
        Ok(_) => Ok(true),
        Err(e) => {
            tracing::debug!("Admin token rejected: {}", e);
            Ok(false)
        }
    }
}

/// Hand-off point for booking requests: validates the inquiry and records it.
/// Forwarding to a reservation backend happens outside this site.
#[server]
pub async fn submit_booking_inquiry(
    inquiry: BookingInquiry,
) -> Result<InquiryReceipt, ServerFnError> {
    let stay = validate_inquiry(&inquiry, today()).map_err(|e| ServerFnError::new(e.to_string()))?;

    let reference = inquiry_reference(stay.check_in, Utc::now().timestamp_millis());
    tracing::info!(
        reference = %reference,
        city = %inquiry.city,
        room = ?inquiry.room_slug,
        check_in = %inquiry.check_in,
        check_out = %inquiry.check_out,
        guests = inquiry.guests,
        nights = stay.nights,
        "Booking inquiry received"
    );

    Ok(InquiryReceipt {
        reference,
        nights: stay.nights,
    })
}
