//! # Payment Request Types
//!
//! Inbound payment request shape, amount validation, and order reference
//! generation. Nothing here is persisted; values live for one request.

use crate::error::{StkError, StkResult};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

/// Inbound payment request from the web client
#[derive(Debug, Deserialize)]
pub struct PayRequest {
    /// Raw phone number as typed by the user
    pub phone: String,
    /// Amount in whole currency units; rounded to the nearest integer
    /// before forwarding
    #[serde(default)]
    pub amount: f64,
}

/// Validate an amount and round it to the integer the gateway expects.
///
/// The gateway minimum is 1; zero, negative, and non-finite values are
/// rejected. Missing amounts deserialize to `0.0` and fail here.
pub fn validate_amount(amount: f64) -> StkResult<i64> {
    if !amount.is_finite() || amount < 1.0 {
        return Err(StkError::InvalidAmount);
    }
    Ok(amount.round() as i64)
}

/// Generate a unique external reference for one gateway request.
///
/// Format: `ORDER-<millisecond epoch>-<6 hex chars>`. The random suffix
/// keeps references unique when two requests land in the same millisecond.
pub fn order_reference() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ORDER-{}-{}", millis, &suffix[..6])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_amounts_round() {
        assert_eq!(validate_amount(1.0).unwrap(), 1);
        assert_eq!(validate_amount(149.7).unwrap(), 150);
        assert_eq!(validate_amount(149.3).unwrap(), 149);
        assert_eq!(validate_amount(2500.0).unwrap(), 2500);
    }

    #[test]
    fn test_invalid_amounts_rejected() {
        assert!(matches!(validate_amount(0.0), Err(StkError::InvalidAmount)));
        assert!(matches!(validate_amount(-5.0), Err(StkError::InvalidAmount)));
        assert!(matches!(validate_amount(0.99), Err(StkError::InvalidAmount)));
        assert!(matches!(validate_amount(f64::NAN), Err(StkError::InvalidAmount)));
        assert!(matches!(
            validate_amount(f64::INFINITY),
            Err(StkError::InvalidAmount)
        ));
    }

    #[test]
    fn test_order_reference_format() {
        let reference = order_reference();
        assert!(reference.starts_with("ORDER-"));

        let parts: Vec<&str> = reference.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 6);
    }

    #[test]
    fn test_order_references_unique() {
        let a = order_reference();
        let b = order_reference();
        assert_ne!(a, b);
    }

    #[test]
    fn test_pay_request_missing_amount_defaults_to_zero() {
        let request: PayRequest = serde_json::from_str(r#"{"phone": "0712345678"}"#).unwrap();
        assert_eq!(request.amount, 0.0);
        assert!(validate_amount(request.amount).is_err());
    }
}
