//! Client configuration.
//!
//! The backend base URL comes from the `BDAY_API_URL` environment variable,
//! falling back to the local development server.

use std::time::Duration;

/// Base URL used when `BDAY_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "BDAY_API_URL";

/// Per-request timeout. Timed-out calls fail; they are never retried.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL including the API prefix, e.g. `https://api.example.com/api/v1`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        }
    }

    /// Read configuration from the environment, with defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        ClientConfig {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
