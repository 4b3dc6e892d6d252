//! # mockpay-api
//!
//! HTTP API layer for mockpay-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for the mock payment flow and user directory
//! - Checkout style configuration endpoint
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/payments/start` | Start payment session |
//! | POST | `/api/payments/continue` | Continue payment session |
//! | GET | `/api/payments/status/:id` | Payment session status |
//! | GET | `/api/payments/style` | Checkout style |
//! | GET | `/api/users` | List users |
//! | POST | `/api/users` | Create user |
//! | GET | `/api/users/:name` | Find user |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
