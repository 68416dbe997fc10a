//! # stk-swiftwallet
//!
//! SwiftWallet gateway integration for stk-relay.
//!
//! This crate provides:
//! - `SwiftWalletConfig` loaded once from the environment at startup
//! - `SwiftWalletClient` for initiating STK push payments
//!
//! The gateway exposes a single `payments.php` endpoint authenticated with a
//! bearer token; the asynchronous payment result arrives later on the
//! configured callback URL.

pub mod client;
pub mod config;

// Re-exports for convenience
pub use client::{StkPushPayload, SwiftWalletClient};
pub use config::SwiftWalletConfig;
