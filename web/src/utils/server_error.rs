/// Prefix leptos puts in front of `ServerFnError::ServerError` messages.
const SERVER_ERROR_PREFIX: &str = "error running server function: ";

/// Message worth showing to a visitor for a failed server call: the text the
/// server function returned, without the transport prefix.
pub fn server_error_message(raw: &str) -> String {
    raw.strip_prefix(SERVER_ERROR_PREFIX)
        .unwrap_or(raw)
        .to_string()
}
