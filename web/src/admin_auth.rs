use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared_types::{AdminCredentials, AuthToken};
use thiserror::Error;

use crate::config::AppConfig;

pub const ADMIN_USER_TYPE: &str = "admin";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Session expired, please sign in again")]
    Expired,
    #[error("Invalid session token")]
    InvalidToken,
    #[error("Password check failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Could not issue session token: {0}")]
    Issue(jsonwebtoken::errors::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminClaims {
    pub sub: String,
    pub exp: usize,
    pub user_type: String,
}

/// Exchanges admin credentials for a session token and checks tokens later.
pub trait Authenticator {
    fn authenticate(&self, credentials: &AdminCredentials) -> Result<AuthToken, AuthError>;

    fn verify(&self, token: &str) -> Result<AdminClaims, AuthError>;
}

/// Single admin account whose email and bcrypt hash come from configuration.
pub struct ConfiguredAuthenticator {
    admin_email: String,
    password_hash: String,
    jwt_secret: String,
    token_ttl: Duration,
}

impl ConfiguredAuthenticator {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
            password_hash: config.admin_password_hash.clone(),
            jwt_secret: config.jwt_secret.clone(),
            token_ttl: Duration::hours(config.token_ttl_hours),
        }
    }

    fn issue(&self, email: &str) -> Result<AuthToken, AuthError> {
        let expires_at = (Utc::now() + self.token_ttl).timestamp();
        let claims = AdminClaims {
            sub: email.to_string(),
            exp: expires_at as usize,
            user_type: ADMIN_USER_TYPE.to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(AuthError::Issue)?;

        Ok(AuthToken { token, expires_at })
    }
}

impl Authenticator for ConfiguredAuthenticator {
    fn authenticate(&self, credentials: &AdminCredentials) -> Result<AuthToken, AuthError> {
        let email = credentials.email.trim().to_lowercase();
        if email != self.admin_email {
            return Err(AuthError::InvalidCredentials);
        }
        if !bcrypt::verify(&credentials.password, &self.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }
        self.issue(&email)
    }

    fn verify(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let data = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::InvalidToken,
        })?;

        let claims = data.claims;
        if claims.user_type != ADMIN_USER_TYPE || claims.sub != self.admin_email {
            return Err(AuthError::InvalidToken);
        }
        Ok(claims)
    }
}
