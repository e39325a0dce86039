//! Client configuration

use serde::{Deserialize, Serialize};

use crate::core::errors::{OneSkyError, Result};

/// Default API base URL of the OneSky platform
pub const DEFAULT_API_URL: &str = "https://platform.api.onesky.io/1/";

/// Configuration for the OneSky client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Public API key, sent verbatim with every request
    pub api_key: String,
    /// API secret, never transmitted; only used to derive the dev hash
    pub api_secret: String,
    /// Base URL of the API, overridable for testing against a local server
    pub api_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_secret: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: 30000,
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the default API URL and timeout
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `ONESKY_API_KEY` and `ONESKY_API_SECRET` are required,
    /// `ONESKY_API_URL` and `ONESKY_TIMEOUT_MS` are optional.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ONESKY_API_KEY").map_err(|_| OneSkyError::ConfigError {
            message: "ONESKY_API_KEY environment variable is required".to_string(),
        })?;

        let api_secret =
            std::env::var("ONESKY_API_SECRET").map_err(|_| OneSkyError::ConfigError {
                message: "ONESKY_API_SECRET environment variable is required".to_string(),
            })?;

        let api_url =
            std::env::var("ONESKY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_ms = std::env::var("ONESKY_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()
            .map_err(|e| OneSkyError::ConfigError {
                message: format!("ONESKY_TIMEOUT_MS must be an integer: {}", e),
            })?;

        Ok(Self {
            api_key,
            api_secret,
            api_url,
            timeout_ms,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(OneSkyError::ConfigError {
                message: "API key is required".to_string(),
            });
        }

        if self.api_secret.is_empty() {
            return Err(OneSkyError::ConfigError {
                message: "API secret is required".to_string(),
            });
        }

        if self.api_url.is_empty() {
            return Err(OneSkyError::ConfigError {
                message: "API URL is required".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(OneSkyError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
