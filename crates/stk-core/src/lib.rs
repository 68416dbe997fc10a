//! # stk-core
//!
//! Core types for the stk-relay payment relay.
//!
//! This crate provides:
//! - [`normalize_phone`] for canonicalizing Kenyan mobile numbers
//! - [`PayRequest`] and amount validation for inbound payment requests
//! - [`order_reference`] for per-request gateway correlation ids
//! - [`StkError`] for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use stk_core::{normalize_phone, validate_amount, order_reference};
//!
//! let phone = normalize_phone("0712 345 678").ok_or(StkError::InvalidPhone)?;
//! let amount = validate_amount(149.7)?; // rounds to 150
//! let reference = order_reference();    // "ORDER-1735689600000-a1b2c3"
//! ```

pub mod error;
pub mod payment;
pub mod phone;

// Re-exports for convenience
pub use error::{StkError, StkResult};
pub use payment::{order_reference, validate_amount, PayRequest};
pub use phone::normalize_phone;
