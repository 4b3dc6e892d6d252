//! # Request Handlers
//!
//! Axum request handlers for the mockpay API.
//! Covers the payment session flow, the user directory, and checkout styling.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::SecondsFormat;
use mockpay_core::{PaymentSession, PaymentStatus, ServiceError};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Start payment request.
///
/// The fields describe the intended charge but do not influence the sandbox
/// outcome; clients may send an empty object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPaymentRequest {
    /// Payment method hint, e.g. "card"
    #[serde(default)]
    pub method: Option<String>,
    /// Amount to charge
    #[serde(default)]
    pub amount: Option<f64>,
    /// ISO currency code
    #[serde(default)]
    pub currency: Option<String>,
}

/// Continue payment request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuePaymentRequest {
    /// Identifier returned by the start call
    pub payment_id: String,
    /// Tokenized payment method collected from the customer
    #[serde(default)]
    pub method_token: Option<String>,
}

/// Start payment response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartPaymentResponse {
    /// Session ID
    pub payment_id: String,
    /// Initial status (always PENDING)
    pub status: PaymentStatus,
    /// Checkout URL (redirect customer here)
    pub redirect_url: String,
}

/// Payment status response, shared by the continue and status endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResponse {
    /// Session ID
    pub payment_id: String,
    /// Current status
    pub status: PaymentStatus,
    /// When the session last changed, RFC 3339 UTC
    pub last_updated: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

fn service_error_to_response(err: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn status_response(session: PaymentSession) -> PaymentStatusResponse {
    PaymentStatusResponse {
        payment_id: session.payment_id,
        status: session.status,
        last_updated: session
            .last_updated
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "mockpay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Start a payment session
#[instrument(skip(state, request), fields(method = ?request.method))]
pub async fn start_payment(
    State(state): State<AppState>,
    Json(request): Json<StartPaymentRequest>,
) -> Json<StartPaymentResponse> {
    let session = state.sessions.start();

    info!("Started payment session: {}", session.payment_id);

    let redirect_url = session.redirect_url.unwrap_or_default();
    Json(StartPaymentResponse {
        payment_id: session.payment_id,
        status: session.status,
        redirect_url,
    })
}

/// Continue a payment session with a collected payment method
#[instrument(skip(state, request), fields(payment_id = %request.payment_id))]
pub async fn continue_payment(
    State(state): State<AppState>,
    Json(request): Json<ContinuePaymentRequest>,
) -> Result<Json<PaymentStatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = state
        .sessions
        .continue_payment(&request.payment_id, request.method_token.as_deref())
        .map_err(|e| {
            error!("Failed to continue payment: {}", e);
            service_error_to_response(e)
        })?;

    info!("Payment session {} is {}", session.payment_id, session.status);

    Ok(Json(status_response(session)))
}

/// Report the status of a payment session
#[instrument(skip(state), fields(payment_id = %payment_id))]
pub async fn check_status(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> Result<Json<PaymentStatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = state
        .sessions
        .check_status(&payment_id)
        .map_err(|e| {
            error!("Failed to check payment status: {}", e);
            service_error_to_response(e)
        })?;

    Ok(Json(status_response(session)))
}

/// Get the checkout style configuration
pub async fn get_style(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.style.clone())
}

/// List all user names
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.users.list())
}

/// Get a single user by name, ignoring case.
///
/// Answers 200 with the stored name, or a JSON `null` when absent.
pub async fn get_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Option<String>> {
    Json(state.users.find(&name))
}

/// Create a user from a plain-text name
#[instrument(skip(state))]
pub async fn create_user(State(state): State<AppState>, name: String) -> String {
    let message = state.users.create(&name);
    info!("Created user: {}", name);
    message
}
