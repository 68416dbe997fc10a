//! # Relay Error Types
//!
//! Typed error handling for the stk-relay service.
//! All fallible operations return `Result<T, StkError>`.

use thiserror::Error;

/// Core error type for all relay operations
#[derive(Debug, Error)]
pub enum StkError {
    /// Configuration errors (missing env vars, invalid values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Phone number failed normalization
    #[error("Invalid phone format")]
    InvalidPhone,

    /// Amount missing, non-numeric, or below the gateway minimum
    #[error("Amount must be >= 1")]
    InvalidAmount,

    /// Gateway accepted the request but reported `success: false`
    #[error("{message}")]
    GatewayDeclined { message: String },

    /// Gateway rejected the request at the HTTP level with a structured error
    #[error("{message}")]
    GatewayError { message: String },

    /// Network/transport error reaching the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StkError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StkError::Configuration(_) => 500,
            StkError::InvalidPhone => 400,
            StkError::InvalidAmount => 400,
            StkError::GatewayDeclined { .. } => 400,
            StkError::GatewayError { .. } => 500,
            StkError::Network(_) => 500,
            StkError::Serialization(_) => 500,
        }
    }

    /// Returns the message safe to send to the HTTP caller.
    ///
    /// Transport and configuration detail stays in the server logs; only
    /// validation messages and the gateway's own error text are surfaced.
    pub fn client_message(&self) -> String {
        match self {
            StkError::InvalidPhone
            | StkError::InvalidAmount
            | StkError::GatewayDeclined { .. }
            | StkError::GatewayError { .. } => self.to_string(),
            StkError::Configuration(_) | StkError::Network(_) | StkError::Serialization(_) => {
                "Server error".to_string()
            }
        }
    }
}

/// Result type alias for relay operations
pub type StkResult<T> = Result<T, StkError>;
