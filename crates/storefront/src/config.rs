//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `HOBNAIL_HOST` - Bind address (default: 127.0.0.1)
//! - `HOBNAIL_PORT` - Listen port (default: 3000)
//! - `HOBNAIL_DATA_DIR` - Directory holding the saved cart (default: .hobnail)
//! - `HOBNAIL_CATALOG_PATH` - Catalog JSON file (default: built-in demo catalog)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_DATA_DIR: &str = ".hobnail";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
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
    /// Directory holding the saved cart slot
    pub data_dir: PathBuf,
    /// Catalog file; the demo catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let get_optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get_or_default("HOBNAIL_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOBNAIL_HOST".to_string(), e.to_string()))?;
        let port = get_or_default("HOBNAIL_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOBNAIL_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_or_default("HOBNAIL_DATA_DIR", DEFAULT_DATA_DIR));
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "HOBNAIL_DATA_DIR".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            host,
            port,
            data_dir,
            catalog_path: get_optional("HOBNAIL_CATALOG_PATH").map(PathBuf::from),
            sentry_dsn: get_optional("SENTRY_DSN"),
            sentry_environment: get_optional("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
