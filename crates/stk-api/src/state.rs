//! # Application State
//!
//! Shared state for the Axum application: server config plus the
//! SwiftWallet client, built once at startup.

use stk_swiftwallet::SwiftWalletClient;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// SwiftWallet gateway client
    pub gateway: SwiftWalletClient,
}

impl AppState {
    /// Create a new AppState from the environment.
    ///
    /// Fails when required gateway configuration is missing, so a
    /// misconfigured process dies at startup rather than per request.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let gateway = SwiftWalletClient::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize SwiftWallet client: {}", e))?;

        Ok(Self { config, gateway })
    }
}
