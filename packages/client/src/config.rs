use std::env;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

const DEFAULT_API_URL: &str = "https://api.mechlink.app";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend connection settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the marketplace API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout; bounds how long an action can stay in flight.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize(base_url.into()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> ClientResult<Self> {
        let base_url = env::var("MECHLINK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = match env::var("MECHLINK_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ClientError::config(format!("Invalid MECHLINK_TIMEOUT_SECS: {raw}")))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            base_url: normalize(base_url),
            timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::config("API base URL is required"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::config(format!(
                "API base URL must be http(s): {}",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(ClientError::config("Timeout must be non-zero"));
        }
        Ok(())
    }
}

fn normalize(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
