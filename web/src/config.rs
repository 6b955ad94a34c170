use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_TOKEN_TTL_HOURS: i64 = 12;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("environment variable {name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("configuration already initialized")]
    AlreadyInitialized,
    #[error("configuration not initialized, call init_config() first")]
    NotInitialized,
}

/// Server-side settings read from the environment (and `.env` in development).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub admin_email: String,
    /// bcrypt hash of the admin password.
    pub admin_password_hash: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let admin_password_hash = required("ADMIN_PASSWORD_HASH")?;
        if !admin_password_hash.starts_with("$2") {
            return Err(ConfigError::Invalid {
                name: "ADMIN_PASSWORD_HASH",
                reason: "expected a bcrypt hash".to_string(),
            });
        }

        let token_ttl_hours = match lookup("ADMIN_TOKEN_TTL_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    name: "ADMIN_TOKEN_TTL_HOURS",
                    reason: format!("'{}' is not a positive number of hours", raw),
                })?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            admin_email: required("ADMIN_EMAIL")?.to_lowercase(),
            admin_password_hash,
            jwt_secret: required("JWT_SECRET")?,
            token_ttl_hours,
        })
    }
}

pub fn init_config() -> Result<&'static AppConfig, ConfigError> {
    let config = AppConfig::from_env()?;
    APP_CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    get_config()
}

pub fn get_config() -> Result<&'static AppConfig, ConfigError> {
    APP_CONFIG.get().ok_or(ConfigError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const HASH: &str = "$2b$04$abcdefghijklmnopqrstuuFZ5n5vQb6e4v3R9yq3bq7xE8pQ1m9uS";

    #[test]
    fn test_reads_all_settings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ADMIN_EMAIL", " Admin@Stayhaven.test "),
            ("ADMIN_PASSWORD_HASH", HASH),
            ("JWT_SECRET", "s3cret"),
            ("ADMIN_TOKEN_TTL_HOURS", "2"),
        ]))
        .unwrap();
        assert_eq!(config.admin_email, "admin@stayhaven.test");
        assert_eq!(config.token_ttl_hours, 2);
    }

    #[test]
    fn test_ttl_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ADMIN_EMAIL", "admin@stayhaven.test"),
            ("ADMIN_PASSWORD_HASH", HASH),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(config.token_ttl_hours, DEFAULT_TOKEN_TTL_HOURS);
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[
            ("ADMIN_EMAIL", "admin@stayhaven.test"),
            ("ADMIN_PASSWORD_HASH", HASH),
            ("JWT_SECRET", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("JWT_SECRET")));
    }

    #[test]
    fn test_plaintext_password_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("ADMIN_EMAIL", "admin@stayhaven.test"),
            ("ADMIN_PASSWORD_HASH", "hunter2"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "ADMIN_PASSWORD_HASH",
                ..
            }
        ));
    }

    #[test]
    fn test_bad_ttl_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("ADMIN_EMAIL", "admin@stayhaven.test"),
            ("ADMIN_PASSWORD_HASH", HASH),
            ("JWT_SECRET", "s3cret"),
            ("ADMIN_TOKEN_TTL_HOURS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "ADMIN_TOKEN_TTL_HOURS",
                ..
            }
        ));
    }
}
