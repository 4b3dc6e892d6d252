//! # Service Error Types
//!
//! Typed error handling for the mockpay services.
//! Fallible operations return `Result<T, ServiceError>`.

use crate::session::PaymentStatus;
use thiserror::Error;

/// Core error type for all mockpay operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration errors (missing values, invalid config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment session not found (strict mode only)
    #[error("Payment session not found: {payment_id}")]
    SessionNotFound { payment_id: String },

    /// Status change that violates the session lifecycle (strict mode only)
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: PaymentStatus,
        to: PaymentStatus,
    },

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Configuration(_) => 500,
            ServiceError::InvalidRequest(_) => 400,
            ServiceError::SessionNotFound { .. } => 404,
            ServiceError::InvalidTransition { .. } => 409,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Returns true if the caller can fix this error by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidRequest(_)
                | ServiceError::SessionNotFound { .. }
                | ServiceError::InvalidTransition { .. }
        )
    }
}

/// Result type alias for mockpay operations
pub type ServiceResult<T> = Result<T, ServiceError>;
