//! # STK Relay
//!
//! Backend relay for SwiftWallet STK push payments.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export API_BASE_URL=https://swiftwallet.example.com/api
//! export API_KEY=sw_live_...
//! export CALLBACK_URL=https://relay.example.com/callback
//!
//! # Run the server
//! stk-relay
//! ```

use stk_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state; dies here on missing gateway config
    let state = AppState::new()?;

    let addr = state.config.socket_addr();

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("stk-relay {} listening on http://{}", env!("CARGO_PKG_VERSION"), addr);
    info!("Payment endpoint: POST http://{}/pay", addr);
    info!("Callback endpoint: POST http://{}/callback", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
