//! Client configuration
//!
//! Loads transport settings from environment variables with sane defaults.
//!
//! ## Environment Variables
//! - `VITRIN_API_BASE_URL`: Server base URL (e.g. `https://api.vitrin.app`)
//! - `VITRIN_HTTP_TIMEOUT_SECS`: Request timeout in seconds

use std::time::Duration;

use url::Url;
use vitrin_domain::{Result, VitrinError};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_BASE_URL: &str = "http://10.0.2.2:5000";

/// Transport settings shared by every resource client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL without a trailing slash
    pub base_url: String,
    /// Total per-request timeout; elapsing produces a network error, never
    /// a retry
    pub timeout: Duration,
    /// Sent as the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("vitrin-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file when one is present. Unset variables fall back
    /// to defaults; set-but-invalid values are an error.
    ///
    /// # Errors
    /// Returns `VitrinError::Config` if a set variable fails to parse.
    pub fn from_env() -> Result<Self> {
        // Absent .env files are the normal case.
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("VITRIN_API_BASE_URL") {
            config.base_url = normalize_base_url(&base_url)?;
        }
        if let Ok(secs) = std::env::var("VITRIN_HTTP_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|e| {
                VitrinError::Config(format!("Invalid VITRIN_HTTP_TIMEOUT_SECS: {}", e))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Override the base URL, validating and normalizing it
    ///
    /// # Errors
    /// Returns `VitrinError::Config` if the URL does not parse.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = normalize_base_url(base_url)?;
        Ok(self)
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url =
        Url::parse(raw).map_err(|e| VitrinError::Config(format!("Invalid base URL: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(VitrinError::Config(format!("Unsupported URL scheme: {}", url.scheme())));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
