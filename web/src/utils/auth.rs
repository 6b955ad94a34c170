use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

pub const ADMIN_TOKEN_KEY: &str = "stayhaven_admin_token";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
struct TokenPayload {
    sub: String,
    exp: i64,
    user_type: String,
}

/// Stores the admin session token in localStorage
pub fn store_admin_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(ADMIN_TOKEN_KEY, token).is_err() {
                leptos::logging::warn!("Could not persist admin session");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = token;
}

/// Reads the admin token, treating an empty value as absent
pub fn read_admin_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        return local_storage()
            .and_then(|storage| storage.get_item(ADMIN_TOKEN_KEY).ok().flatten())
            .filter(|token| !token.is_empty());
    }

    // On server side, we don't have access to localStorage
    #[cfg(not(feature = "hydrate"))]
    None
}

pub fn clear_admin_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ADMIN_TOKEN_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Client-side sanity check before bothering the server: the token must be
/// a well-formed admin JWT that has not expired yet. The signature is only
/// checked server-side.
pub fn token_looks_live(token: &str, now_unix: i64) -> bool {
    decode_payload(token)
        .map(|payload| payload.user_type == "admin" && payload.exp > now_unix)
        .unwrap_or(false)
}

fn decode_payload(token: &str) -> Option<TokenPayload> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    // JWT segments are unpadded, but tolerate padded input
    let payload = parts[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice::<TokenPayload>(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_live_admin_token() {
        let token = token_with(r#"{"sub":"a@b.co","exp":2000,"user_type":"admin"}"#);
        assert!(token_looks_live(&token, 1999));
        assert!(!token_looks_live(&token, 2000));
    }

    #[test]
    fn test_non_admin_token() {
        let token = token_with(r#"{"sub":"a@b.co","exp":2000,"user_type":"client"}"#);
        assert!(!token_looks_live(&token, 0));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(!token_looks_live("", 0));
        assert!(!token_looks_live("a.b", 0));
        assert!(!token_looks_live("a.%%%.c", 0));
        assert!(!token_looks_live(&token_with("not json"), 0));
    }

    #[test]
    fn test_server_side_has_no_token() {
        #[cfg(not(feature = "hydrate"))]
        assert_eq!(read_admin_token(), None);
    }
}
