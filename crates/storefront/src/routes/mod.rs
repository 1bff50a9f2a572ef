//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - About page
//! GET  /team                   - Team page
//! GET  /health                 - Health check
//!
//! # Shells
//! GET  /account                - Account shell
//! GET  /admin                  - Admin shell
//!
//! # Components (HTMX fragments)
//! GET  /components/progress-bar     - Progress bar for `value`
//! GET  /components/scroll-progress  - Scroll indicator for a scroll geometry
//!
//! # Checkout API (JSON)
//! POST /api/coupons/verify     - Verify a coupon against an amount
//! POST /api/payments/stripe    - Create a Stripe payment intent
//! ```

pub mod api;
pub mod components;
pub mod pages;
pub mod shells;

use axum::Router;

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(shells::router())
        .nest("/components", components::router())
        .nest("/api", api::router())
}
