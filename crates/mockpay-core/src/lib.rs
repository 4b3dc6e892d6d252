//! # mockpay-core
//!
//! Core types for the mockpay sandbox backend.
//!
//! This crate provides:
//! - `PaymentSession`, `PaymentStatus`, and `SessionStore` for the payment flow
//! - `SessionMode` to switch between canned and lifecycle-enforcing behavior
//! - `CheckoutBase` for building customer redirect URLs
//! - `UserDirectory` for the demo user listing
//! - `StyleConfig` for checkout page styling
//! - `ServiceError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use mockpay_core::{CheckoutBase, SessionMode, SessionStore};
//!
//! // Create a lifecycle-enforcing store
//! let store = SessionStore::new(SessionMode::Strict, CheckoutBase::default());
//!
//! // Walk a session through its lifecycle
//! let session = store.start();
//! store.continue_payment(&session.payment_id, Some("tok_visa"))?;
//! let settled = store.check_status(&session.payment_id)?;
//!
//! // Redirect user to session.redirect_url
//! ```

pub mod directory;
pub mod error;
pub mod session;
pub mod style;

// Re-exports for convenience
pub use directory::{UserDirectory, SEED_USERS};
pub use error::{ServiceError, ServiceResult};
pub use session::{
    CheckoutBase, PaymentSession, PaymentStatus, SessionMode, SessionStore,
    DECLINE_METHOD_TOKEN, DEFAULT_CHECKOUT_BASE,
};
pub use style::StyleConfig;
