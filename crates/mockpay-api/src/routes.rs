//! # Routes
//!
//! Axum router configuration for the mockpay API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Payments:
///   - POST /api/payments/start - Start a payment session
///   - POST /api/payments/continue - Continue a session with a method token
///   - GET  /api/payments/status/{payment_id} - Report session status
///   - GET  /api/payments/style - Checkout style configuration
///
/// - Users:
///   - GET  /api/users - List user names
///   - POST /api/users - Create a user (plain-text body)
///   - GET  /api/users/{name} - Find a user, ignoring case
///
/// - Health:
///   - GET /health and GET / - Liveness check
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the sandbox is called from arbitrary frontends
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Payment session routes
    let payment_routes = Router::new()
        .route("/payments/start", post(handlers::start_payment))
        .route("/payments/continue", post(handlers::continue_payment))
        .route("/payments/status/{payment_id}", get(handlers::check_status))
        .route("/payments/style", get(handlers::get_style));

    // User directory routes
    let user_routes = Router::new()
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/users/{name}", get(handlers::get_user));

    // Combined API routes
    let api_routes = Router::new().merge(payment_routes).merge(user_routes);

    // Combine all routes
    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API
        .nest("/api", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
