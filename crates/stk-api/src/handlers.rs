//! # Request Handlers
//!
//! Axum request handlers for the payment relay: validate-then-forward for
//! `/pay`, an always-200 acknowledgment for the gateway callback.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use stk_core::{normalize_phone, validate_amount, PayRequest, StkError};
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Successful payment initiation response
#[derive(Debug, Serialize)]
pub struct PayResponse {
    pub success: bool,
    pub message: String,
}

/// Error response, shared by 400 and 500 outcomes
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

fn stk_error_to_response(err: &StkError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.client_message())))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "stk-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Initiate an STK push payment.
///
/// Validates the phone and amount, forwards to SwiftWallet, and maps the
/// outcome: 200 on acceptance, 400 for client-caused failures and gateway
/// declines, 500 for transport failures (generic message only).
#[instrument(skip(state, request))]
pub async fn initiate_payment(
    State(state): State<AppState>,
    request: Result<Json<PayRequest>, JsonRejection>,
) -> Result<Json<PayResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Malformed bodies get the same response shape as validation failures
    let Json(request) = request.map_err(|rejection| {
        warn!("Rejected /pay body: {}", rejection.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid request body")),
        )
    })?;

    let phone = normalize_phone(&request.phone)
        .ok_or_else(|| stk_error_to_response(&StkError::InvalidPhone))?;

    let amount = validate_amount(request.amount).map_err(|e| stk_error_to_response(&e))?;

    info!("Initiating STK push: phone={}, amount={}", phone, amount);

    state
        .gateway
        .initiate_stk_push(&phone, amount)
        .await
        .map_err(|e| {
            error!("STK push failed: {}", e);
            stk_error_to_response(&e)
        })?;

    Ok(Json(PayResponse {
        success: true,
        message: "STK push sent, check your phone".to_string(),
    }))
}

/// Receive the SwiftWallet payment result callback.
///
/// The gateway retries callbacks that are not acknowledged, so this logs
/// the payload and always answers 200 with the fixed acknowledgment body.
/// No sender authentication; the relay keeps no state to update.
pub async fn payment_callback(body: Bytes) -> impl IntoResponse {
    info!("Callback received: {}", String::from_utf8_lossy(&body));

    Json(serde_json::json!({
        "ResultCode": 0,
        "ResultDesc": "Success"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let err = ErrorResponse::new("Invalid phone format");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid phone format");
    }

    #[test]
    fn test_stk_error_conversion() {
        let (status, Json(body)) = stk_error_to_response(&StkError::InvalidAmount);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Amount must be >= 1");

        let (status, Json(body)) =
            stk_error_to_response(&StkError::Network("connection refused".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Server error");
    }
}
