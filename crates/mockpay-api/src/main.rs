//! # Mockpay RS
//!
//! Sandbox payment backend with canned flows for frontend and API demos.
//!
//! ## Usage
//!
//! ```bash
//! # Optional environment variables
//! export PORT=8080
//! export CHECKOUT_BASE_URL=https://checkout.example.com/
//! export SESSION_MODE=mock   # or "strict"
//!
//! # Run the server
//! mockpay
//! ```

use mockpay_api::{routes, state::AppState};
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

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Session mode: {}", state.sessions.mode());
    info!("Users seeded: {}", state.users.len());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Mockpay starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("💳 Start payment: POST http://{}/api/payments/start", addr);
        info!("👥 Users: http://{}/api/users", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  💳 Mockpay RS 💳
  ━━━━━━━━━━━━━━━━━━
  Sandbox payment backend
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
