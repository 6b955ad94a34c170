pub mod auth;
pub mod popover;
pub mod server_error;
