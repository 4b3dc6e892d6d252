//! # Payment Session Types
//!
//! Payment session lifecycle for the mockpay sandbox.
//!
//! The sandbox runs in one of two modes:
//!
//! - [`SessionMode::Mock`] (default): every operation succeeds and returns a
//!   canned result, whether or not the identifier was ever issued. Nothing is
//!   retained between calls. This is the contract API-documentation clients
//!   rely on.
//! - [`SessionMode::Strict`]: sessions live in a keyed store and the status
//!   sequence PENDING → PROCESSING → {COMPLETED, FAILED} is enforced. Unknown
//!   identifiers are rejected with [`ServiceError::SessionNotFound`].

use crate::error::{ServiceError, ServiceResult};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Default base for redirect URLs; the payment identifier is appended
/// verbatim.
pub const DEFAULT_CHECKOUT_BASE: &str = "https://checkout.example.com/";

/// Method token that routes a strict-mode session to FAILED at settlement.
/// Any other token (or none) settles COMPLETED. Mirrors the magic test
/// values real payment sandboxes accept in place of live credentials.
pub const DECLINE_METHOD_TOKEN: &str = "tok_decline";

// Fixed `last_updated` instants reported by the mock flow. Stable across
// calls within a run so clients can assert on them.
const MOCK_PROCESSING_AT: i64 = 1_698_400_800; // 2023-10-27T10:00:00Z
const MOCK_COMPLETED_AT: i64 = 1_698_401_100; // 2023-10-27T10:05:00Z

fn canned_time(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
}

/// Status of a payment session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Session created, awaiting a payment method
    Pending,
    /// Payment method accepted, settlement in flight
    Processing,
    /// Payment settled successfully
    Completed,
    /// Payment declined or errored
    Failed,
}

impl PaymentStatus {
    /// Returns the wire form of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Processing => "PROCESSING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
        }
    }

    /// Check if this status has no successors
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaymentStatus::Completed | PaymentStatus::Failed)
    }

    /// Check if moving to `next` respects the session lifecycle.
    /// The only legal transitions are PENDING → PROCESSING and
    /// PROCESSING → {COMPLETED, FAILED}.
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (PaymentStatus::Pending, PaymentStatus::Processing)
                | (PaymentStatus::Processing, PaymentStatus::Completed)
                | (PaymentStatus::Processing, PaymentStatus::Failed)
        )
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Opaque unique identifier (UUID v4 in string form), immutable once
    /// issued
    pub payment_id: String,

    /// Current status
    #[serde(default)]
    pub status: PaymentStatus,

    /// Where the customer is sent to complete the payment; present only at
    /// creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    /// When the session last changed
    pub last_updated: DateTime<Utc>,
}

impl PaymentSession {
    /// Create a new session in the PENDING state
    pub fn pending(payment_id: impl Into<String>, redirect_url: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            status: PaymentStatus::Pending,
            redirect_url: Some(redirect_url.into()),
            last_updated: Utc::now(),
        }
    }

    /// Check if the session has reached a terminal status
    pub fn is_settled(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Base URL customers are redirected to in order to complete a payment.
///
/// The redirect target is the base with the payment identifier appended
/// verbatim; no separator is inserted, so a base intended to produce
/// path-style URLs must end in `/`.
#[derive(Debug, Clone)]
pub struct CheckoutBase {
    base_url: String,
}

impl CheckoutBase {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the redirect URL for a payment identifier
    pub fn redirect_url(&self, payment_id: &str) -> String {
        format!("{}{}", self.base_url, payment_id)
    }
}

impl Default for CheckoutBase {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKOUT_BASE)
    }
}

/// Behavior of the session service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Canned responses for any identifier, nothing retained
    Mock,
    /// Keyed store with enforced lifecycle, unknown identifiers rejected
    Strict,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Mock => "mock",
            SessionMode::Strict => "strict",
        }
    }
}

impl Default for SessionMode {
    fn default() -> Self {
        SessionMode::Mock
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mock") {
            Ok(SessionMode::Mock)
        } else if s.eq_ignore_ascii_case("strict") {
            Ok(SessionMode::Strict)
        } else {
            Err(format!("invalid session mode: {s}"))
        }
    }
}

/// A stored session plus the settlement outcome chosen at continue time
struct SessionRecord {
    session: PaymentSession,
    declined: bool,
}

/// Keyed store of payment sessions.
///
/// Cheap to clone; all clones share the same backing map.
#[derive(Clone)]
pub struct SessionStore {
    mode: SessionMode,
    base: CheckoutBase,
    sessions: Arc<DashMap<String, SessionRecord>>,
}

impl SessionStore {
    /// Create a store with the given mode and redirect base
    pub fn new(mode: SessionMode, base: CheckoutBase) -> Self {
        Self {
            mode,
            base,
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Start a new payment session.
    ///
    /// Issues a fresh identifier, status PENDING, and a redirect URL built
    /// from the configured base. Never fails. In mock mode the session is a
    /// pure value; in strict mode it is recorded for later transitions.
    pub fn start(&self) -> PaymentSession {
        let payment_id = Uuid::new_v4().to_string();
        let session = PaymentSession::pending(&payment_id, self.base.redirect_url(&payment_id));

        if self.mode == SessionMode::Strict {
            self.sessions.insert(
                payment_id,
                SessionRecord {
                    session: session.clone(),
                    declined: false,
                },
            );
        }

        session
    }

    /// Continue a payment with a method token.
    ///
    /// Mock mode echoes the identifier with status PROCESSING and a fixed
    /// timestamp, known or not. Strict mode requires an existing PENDING
    /// session and moves it to PROCESSING; the method token decides the
    /// settlement outcome (see [`DECLINE_METHOD_TOKEN`]).
    pub fn continue_payment(
        &self,
        payment_id: &str,
        method_token: Option<&str>,
    ) -> ServiceResult<PaymentSession> {
        match self.mode {
            SessionMode::Mock => Ok(PaymentSession {
                payment_id: payment_id.to_owned(),
                status: PaymentStatus::Processing,
                redirect_url: None,
                last_updated: canned_time(MOCK_PROCESSING_AT),
            }),
            SessionMode::Strict => {
                let mut record = self.sessions.get_mut(payment_id).ok_or_else(|| {
                    ServiceError::SessionNotFound {
                        payment_id: payment_id.to_owned(),
                    }
                })?;

                let current = record.session.status;
                if !current.can_transition_to(PaymentStatus::Processing) {
                    return Err(ServiceError::InvalidTransition {
                        from: current,
                        to: PaymentStatus::Processing,
                    });
                }

                record.session.status = PaymentStatus::Processing;
                record.session.last_updated = Utc::now();
                record.declined = method_token == Some(DECLINE_METHOD_TOKEN);

                Ok(record.session.clone())
            }
        }
    }

    /// Report the status of a payment.
    ///
    /// Mock mode answers COMPLETED with a fixed timestamp for any
    /// identifier and persists nothing. Strict mode settles PROCESSING
    /// sessions on this call (COMPLETED, or FAILED when the session was
    /// continued with the decline token) and otherwise reports the stored
    /// status unchanged.
    pub fn check_status(&self, payment_id: &str) -> ServiceResult<PaymentSession> {
        match self.mode {
            SessionMode::Mock => Ok(PaymentSession {
                payment_id: payment_id.to_owned(),
                status: PaymentStatus::Completed,
                redirect_url: None,
                last_updated: canned_time(MOCK_COMPLETED_AT),
            }),
            SessionMode::Strict => {
                let mut record = self.sessions.get_mut(payment_id).ok_or_else(|| {
                    ServiceError::SessionNotFound {
                        payment_id: payment_id.to_owned(),
                    }
                })?;

                if record.session.status == PaymentStatus::Processing {
                    record.session.status = if record.declined {
                        PaymentStatus::Failed
                    } else {
                        PaymentStatus::Completed
                    };
                    record.session.last_updated = Utc::now();
                }

                Ok(record.session.clone())
            }
        }
    }

    /// Look up a stored session without touching its state
    pub fn get(&self, payment_id: &str) -> Option<PaymentSession> {
        self.sessions.get(payment_id).map(|r| r.session.clone())
    }

    /// Number of stored sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if the store holds no sessions
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionMode::default(), CheckoutBase::default())
    }
}
