//! JSON API route handlers for checkout.
//!
//! Thin proxies over the commerce client: the browser never talks to the
//! commerce API directly, so the API token stays server-side. Responses are
//! passed through unmodified.

use axum::{Json, Router, extract::State, routing::post};
use serde_json::Value;
use tracing::instrument;

use crate::commerce::{CouponVerificationRequest, PaymentIntentRequest};
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Verify a coupon for the current cart total.
///
/// # Errors
///
/// Returns the commerce failure mapped to an HTTP status.
#[instrument(skip(state))]
pub async fn verify_coupon(
    State(state): State<AppState>,
    Json(request): Json<CouponVerificationRequest>,
) -> Result<Json<Value>> {
    add_breadcrumb(
        "checkout",
        "Verifying coupon",
        Some(&[("code", request.code.as_str())]),
    );

    let verification = state
        .commerce()
        .verify_coupon(request.code, request.amount)
        .await?;

    Ok(Json(verification))
}

/// Create a Stripe payment intent for an order.
///
/// # Errors
///
/// Returns the commerce failure mapped to an HTTP status.
#[instrument(skip(state))]
pub async fn create_stripe_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<PaymentIntentRequest>,
) -> Result<Json<Value>> {
    add_breadcrumb(
        "checkout",
        "Creating payment intent",
        Some(&[("order_id", request.order_id.as_str())]),
    );

    let intent = state
        .commerce()
        .create_stripe_payment_intent(request.amount, request.order_id)
        .await?;

    Ok(Json(intent))
}

/// Create the checkout API routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/coupons/verify", post(verify_coupon))
        .route("/payments/stripe", post(create_stripe_payment_intent))
}
