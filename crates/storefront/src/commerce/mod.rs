//! Remote commerce API client.
//!
//! # Architecture
//!
//! - One shared `reqwest::Client` configured with the base URL, default
//!   headers and the bearer token (if any)
//! - The commerce API is the source of truth - no local state, no caching
//! - Payloads are opaque: responses deserialize into whatever type the
//!   caller asks for (`serde_json::Value` for pass-through)
//!
//! # Failure policy
//!
//! Every failure (transport, non-2xx status, undecodable body) is reported
//! exactly once to the client's [`DiagnosticSink`] and then returned to the
//! caller unchanged. There is no retry and no fallback.
//!
//! # Example
//!
//! ```rust,ignore
//! use herowear_core::{Amount, CouponCode, OrderId};
//! use herowear_storefront::commerce::CommerceClient;
//!
//! let client = CommerceClient::new(&config.commerce)?;
//!
//! let verification: serde_json::Value = client
//!     .verify_coupon(CouponCode::new("SAVE10"), Amount::from(100_u32))
//!     .await?;
//!
//! let intent: serde_json::Value = client
//!     .create_stripe_payment_intent(Amount::from(500_u32), OrderId::new("order-123"))
//!     .await?;
//! ```

mod client;
mod coupons;
mod payments;

pub use client::CommerceClient;
pub use coupons::{CouponVerificationRequest, VERIFY_COUPON_PATH};
pub use payments::{PaymentIntentRequest, STRIPE_PAYMENT_INTENT_PATH};

use thiserror::Error;

/// Maximum number of response body characters kept in a failure.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// A failed call to the commerce API.
///
/// Covers both transport-level failures and application-level failures
/// (non-success status, malformed body).
#[derive(Debug, Error)]
pub enum RemoteCallFailure {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RemoteCallFailure {
    pub(crate) fn status(status: reqwest::StatusCode, body: &str) -> Self {
        Self::Status {
            status: status.as_u16(),
            message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        }
    }

    /// The HTTP status returned by the API, if it answered at all.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

/// Errors building a [`CommerceClient`].
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The API token cannot be sent as a header value.
    #[error("Invalid API token format: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// The underlying HTTP client failed to build.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Receives a diagnostic for every failed commerce API call.
pub trait DiagnosticSink: Send + Sync + 'static {
    /// Called once per failed call, before the failure is returned.
    fn remote_call_failed(&self, endpoint: &str, failure: &RemoteCallFailure);
}

/// Default sink: structured `tracing` error plus a Sentry event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn remote_call_failed(&self, endpoint: &str, failure: &RemoteCallFailure) {
        let event_id = sentry::capture_error(failure);
        tracing::error!(
            endpoint,
            status = failure.http_status(),
            error = %failure,
            sentry_event_id = %event_id,
            "Commerce API call failed"
        );
    }
}
