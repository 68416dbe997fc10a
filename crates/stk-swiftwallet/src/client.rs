//! # SwiftWallet STK Push Client
//!
//! Initiates STK push payments against the SwiftWallet `payments.php`
//! endpoint. One outbound call per payment request; the actual payment
//! result arrives asynchronously on the configured callback URL.

use crate::config::SwiftWalletConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use stk_core::{order_reference, StkError, StkResult};
use tracing::{debug, error, info, instrument};

/// Placeholder customer name sent with every payment; the gateway requires
/// the field but does not use it for STK push
const CUSTOMER_NAME: &str = "Customer";

/// Outbound payload for the SwiftWallet payments endpoint
#[derive(Debug, Serialize)]
pub struct StkPushPayload {
    /// Whole-unit amount, minimum 1
    pub amount: i64,
    /// Canonical `254XXXXXXXXX` phone number
    pub phone_number: String,
    /// Unique per-request correlation id
    pub external_reference: String,
    /// Required by the gateway, constant for this relay
    pub customer_name: &'static str,
    /// Where the gateway posts the payment result
    pub callback_url: String,
    /// Omitted (not null) when no channel is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
}

/// Gateway response body; non-listed fields are ignored
#[derive(Debug, Deserialize)]
struct GatewayResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the SwiftWallet payment gateway
#[derive(Clone)]
pub struct SwiftWalletClient {
    config: SwiftWalletConfig,
    client: Client,
}

impl SwiftWalletClient {
    /// Create a new client with a 30-second request timeout.
    ///
    /// The gateway defines no SLA for `payments.php`; 30 seconds bounds the
    /// relay's own response time instead of inheriting an unbounded wait.
    pub fn new(config: SwiftWalletConfig) -> StkResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| StkError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> StkResult<Self> {
        let config = SwiftWalletConfig::from_env()?;
        Self::new(config)
    }

    /// Initiate an STK push for a normalized phone number and whole-unit
    /// amount.
    ///
    /// Returns `Ok(())` when the gateway accepts the push (the user then
    /// confirms on their phone). Gateway declines map to
    /// [`StkError::GatewayDeclined`]; transport failures map to
    /// [`StkError::Network`] with detail kept in the logs.
    #[instrument(skip(self), fields(phone = %phone, amount = amount))]
    pub async fn initiate_stk_push(&self, phone: &str, amount: i64) -> StkResult<()> {
        let payload = StkPushPayload {
            amount,
            phone_number: phone.to_string(),
            external_reference: order_reference(),
            customer_name: CUSTOMER_NAME,
            callback_url: self.config.callback_url.clone(),
            channel_id: self.config.channel_id,
        };

        match payload.channel_id {
            Some(id) => debug!("Using channel_id: {}", id),
            None => debug!("No CHANNEL_ID set, using default channel from SwiftWallet dashboard"),
        }

        let url = self.config.payments_url();
        info!("Sending payment request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .json(&payload)
            .send()
            .await
            .map_err(|e| StkError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StkError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("SwiftWallet API error: status={}, body={}", status, body);

            // Surface the gateway's own error field when it sent one;
            // everything else stays server-side
            if let Ok(gateway) = serde_json::from_str::<GatewayResponse>(&body) {
                if let Some(message) = gateway.error {
                    return Err(StkError::GatewayError { message });
                }
            }

            return Err(StkError::Network(format!("HTTP {status}: {body}")));
        }

        let gateway: GatewayResponse = serde_json::from_str(&body).map_err(|e| {
            StkError::Serialization(format!("Failed to parse SwiftWallet response: {e}"))
        })?;

        if gateway.success {
            info!(
                "STK push accepted: reference={}",
                payload.external_reference
            );
            Ok(())
        } else {
            let message = gateway
                .error
                .unwrap_or_else(|| "Failed to initiate payment".to_string());
            error!("SwiftWallet declined payment: {}", message);
            Err(StkError::GatewayDeclined { message })
        }
    }
}
