//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GATEHOUSE_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `GATEHOUSE_HOST` - Bind address (default: 127.0.0.1)
//! - `GATEHOUSE_PORT` - Listen port (default: 3000)
//! - `GATEHOUSE_STORE_ID` - Store served by this instance (default: 1)
//! - `GATEHOUSE_LOGIN_PATH` - Where gated visitors are sent (default: /customer/account/login)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//!
//! Gate settings themselves are read by
//! [`ScopedConfigStore::from_env`](crate::config_store::ScopedConfigStore::from_env).

use std::net::{IpAddr, SocketAddr};

use gatehouse_core::StoreId;
use thiserror::Error;

use crate::routes::RESERVED_PATHS;

/// Default login page path.
pub const DEFAULT_LOGIN_PATH: &str = "/customer/account/login";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Store served by this instance
    pub store_id: StoreId,
    /// Login page path
    pub login_path: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. production, staging)
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = parse_var(&lookup, "GATEHOUSE_HOST", "127.0.0.1")?;
        let port: u16 = parse_var(&lookup, "GATEHOUSE_PORT", "3000")?;
        let store_id: StoreId = parse_var(&lookup, "GATEHOUSE_STORE_ID", "1")?;
        let base_url = lookup("GATEHOUSE_BASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("GATEHOUSE_BASE_URL".to_string()))?;
        let login_path =
            lookup("GATEHOUSE_LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
        validate_login_path(&login_path)?;

        Ok(Self {
            host,
            port,
            base_url,
            store_id,
            login_path,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, falling back to `default` when unset.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// The login page is mounted as a literal route next to the fixed ones.
fn validate_login_path(path: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| {
        ConfigError::InvalidEnvVar("GATEHOUSE_LOGIN_PATH".to_string(), reason.to_string())
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path.contains(['{', '}']) {
        return Err(invalid("must not contain route parameters"));
    }
    if RESERVED_PATHS.contains(&path) {
        return Err(invalid(&format!("{path} is already served by another route")));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("GATEHOUSE_BASE_URL", "http://localhost:3000")]).unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.store_id, StoreId::new(1));
        assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_missing_base_url() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "GATEHOUSE_BASE_URL"));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[
            ("GATEHOUSE_BASE_URL", "http://localhost:3000"),
            ("GATEHOUSE_PORT", "eighty"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "GATEHOUSE_PORT"));
    }

    #[test]
    fn test_invalid_store_id() {
        let err = load(&[
            ("GATEHOUSE_BASE_URL", "http://localhost:3000"),
            ("GATEHOUSE_STORE_ID", "main"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "GATEHOUSE_STORE_ID"));
    }

    #[test]
    fn test_relative_login_path_rejected() {
        let err = load(&[
            ("GATEHOUSE_BASE_URL", "http://localhost:3000"),
            ("GATEHOUSE_LOGIN_PATH", "login"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_login_path_colliding_with_routes_rejected() {
        for path in ["/", "/api/store", "/health", "/customer/account/logout", "/{id}"] {
            let err = load(&[
                ("GATEHOUSE_BASE_URL", "http://localhost:3000"),
                ("GATEHOUSE_LOGIN_PATH", path),
            ])
            .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "GATEHOUSE_LOGIN_PATH"),
                "{path}"
            );
        }
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("GATEHOUSE_BASE_URL", "https://shop.example.com"),
            ("GATEHOUSE_HOST", "0.0.0.0"),
            ("GATEHOUSE_PORT", "8080"),
            ("GATEHOUSE_STORE_ID", "3"),
            ("GATEHOUSE_LOGIN_PATH", "/login"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().port(), 8080);
        assert_eq!(config.store_id, StoreId::new(3));
        assert_eq!(config.login_path, "/login");
        assert!(config.is_secure());
        assert!(config.sentry_dsn.is_some());
    }
}
