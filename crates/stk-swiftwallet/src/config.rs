//! # SwiftWallet Configuration
//!
//! Configuration management for the SwiftWallet gateway.
//! All secrets are loaded from environment variables once at startup.

use std::env;
use stk_core::StkError;

/// SwiftWallet API configuration
#[derive(Debug, Clone)]
pub struct SwiftWalletConfig {
    /// Gateway base URL, always with a trailing slash
    pub api_base_url: String,

    /// Bearer token for the gateway API
    pub api_key: String,

    /// URL the gateway posts asynchronous payment results to
    pub callback_url: String,

    /// Optional payment channel; when unset the gateway uses the
    /// account's default channel
    pub channel_id: Option<i64>,
}

impl SwiftWalletConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `API_BASE_URL`
    /// - `API_KEY`
    ///
    /// Optional:
    /// - `CALLBACK_URL`
    /// - `CHANNEL_ID` (integer)
    ///
    /// Missing required vars fail here so the process dies at startup
    /// instead of producing malformed gateway URLs per request.
    pub fn from_env() -> Result<Self, StkError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = env::var("API_BASE_URL")
            .map_err(|_| StkError::Configuration("API_BASE_URL not set".to_string()))?;

        let api_key = env::var("API_KEY")
            .map_err(|_| StkError::Configuration("API_KEY not set".to_string()))?;

        let callback_url = env::var("CALLBACK_URL").unwrap_or_default();

        let channel_id = match env::var("CHANNEL_ID") {
            Ok(raw) => Some(raw.parse::<i64>().map_err(|_| {
                StkError::Configuration(format!("CHANNEL_ID is not an integer: {raw}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            api_base_url: normalize_base_url(api_base_url),
            api_key,
            callback_url,
            channel_id,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        api_base_url: impl Into<String>,
        api_key: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.into()),
            api_key: api_key.into(),
            callback_url: callback_url.into(),
            channel_id: None,
        }
    }

    /// Builder: set the payment channel
    pub fn with_channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    /// Full URL of the payments endpoint
    pub fn payments_url(&self) -> String {
        format!("{}payments.php", self.api_base_url)
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

/// Ensure the base URL ends with exactly one trailing slash
fn normalize_base_url(url: String) -> String {
    if url.ends_with('/') {
        url
    } else {
        format!("{url}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_added() {
        let config = SwiftWalletConfig::new("https://api.example.com", "key", "");
        assert_eq!(config.api_base_url, "https://api.example.com/");
        assert_eq!(config.payments_url(), "https://api.example.com/payments.php");
    }

    #[test]
    fn test_trailing_slash_preserved() {
        let config = SwiftWalletConfig::new("https://api.example.com/", "key", "");
        assert_eq!(config.api_base_url, "https://api.example.com/");
        assert_eq!(config.payments_url(), "https://api.example.com/payments.php");
    }

    #[test]
    fn test_auth_header() {
        let config = SwiftWalletConfig::new("https://api.example.com", "sw_abc123", "");
        assert_eq!(config.auth_header(), "Bearer sw_abc123");
    }

    #[test]
    fn test_channel_id_builder() {
        let config =
            SwiftWalletConfig::new("https://api.example.com", "key", "").with_channel_id(42);
        assert_eq!(config.channel_id, Some(42));
    }

    #[test]
    fn test_from_env_missing_base_url() {
        // Clear any existing env vars
        env::remove_var("API_BASE_URL");

        let result = SwiftWalletConfig::from_env();
        assert!(result.is_err());
    }
}
