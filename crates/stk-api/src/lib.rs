//! # stk-api
//!
//! HTTP API layer for stk-relay.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The `/pay` endpoint that validates and forwards payment requests
//! - The `/callback` receiver for asynchronous gateway notifications
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/pay` | Initiate an STK push payment |
//! | POST | `/callback` | SwiftWallet payment result callback |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
