//! Runtime configuration.
//!
//! Everything is read from environment variables once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Backend endpoint for station records.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/estaciones";

/// Address the front end listens on.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Request timeout for backend calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("ESTACIONES_BIND is not a socket address: {0}")]
    InvalidBindAddr(String),

    #[error("ESTACIONES_TIMEOUT_SECS is not a positive integer: {0}")]
    InvalidTimeout(String),

    #[error("ESTACIONES_API_URL must not be empty")]
    EmptyApiUrl,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the stations collection on the backend
    pub api_url: String,
    /// Listen address for the web front end
    pub bind_addr: SocketAddr,
    /// Backend request timeout in seconds
    pub timeout_secs: u64,
    /// Seed file for the in-memory repository; `None` uses the HTTP backend
    pub mock_data: Option<PathBuf>,
    /// Static asset directory
    pub static_dir: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("ESTACIONES_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }

        let bind = lookup("ESTACIONES_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind.clone()))?;

        let timeout_secs = match lookup("ESTACIONES_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mock_data = lookup("ESTACIONES_MOCK_DATA")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let static_dir =
            lookup("ESTACIONES_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            api_url,
            bind_addr,
            timeout_secs,
            mock_data,
            static_dir,
        })
    }
}
