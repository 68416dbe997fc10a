//! # Routes
//!
//! Axum router configuration for the payment relay.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed to call the relay: the production checkout site plus
/// the two local dev servers.
const ALLOWED_ORIGINS: [&str; 3] = [
    "https://swiftwallet-stk-push.netlify.app",
    "http://localhost:3000",
    "http://localhost:5173",
];

/// Create the main application router
///
/// Routes:
/// - POST /pay - Validate and forward a payment request
/// - POST /callback - SwiftWallet payment result callback (no CORS needed;
///   the gateway calls server-to-server)
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/pay", post(handlers::initiate_payment))
        .route("/callback", post(handlers::payment_callback))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
