//! Account and admin shell layouts.
//!
//! The shells render the navigation chrome only; section content is served by
//! the commerce backend and is not part of the storefront.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, response::IntoResponse, routing::get};
use tracing::instrument;

use super::pages::page_progress_bar;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// A sidebar navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            active: false,
        }
    }
}

const ACCOUNT_NAV: [NavLink; 4] = [
    NavLink::new("Overview", "/account"),
    NavLink::new("Orders", "/account/orders"),
    NavLink::new("Addresses", "/account/addresses"),
    NavLink::new("Wishlist", "/account/wishlist"),
];

const ADMIN_NAV: [NavLink; 4] = [
    NavLink::new("Dashboard", "/admin"),
    NavLink::new("Products", "/admin/products"),
    NavLink::new("Orders", "/admin/orders"),
    NavLink::new("Coupons", "/admin/coupons"),
];

/// Shared shell template.
#[derive(Template, WebTemplate)]
#[template(path = "shells/shell.html")]
pub struct ShellTemplate {
    pub progress_bar: String,
    pub heading: &'static str,
    pub intro: &'static str,
    pub shell_class: &'static str,
    pub nav: Vec<NavLink>,
}

/// Mark the entry whose href equals `current` as active.
fn nav_for(links: &[NavLink], current: &str) -> Vec<NavLink> {
    links
        .iter()
        .map(|link| NavLink {
            active: link.href == current,
            ..*link
        })
        .collect()
}

/// Display the account shell.
///
/// # Errors
///
/// Returns an error if the progress bar fails to render.
#[instrument(skip(state))]
pub async fn account(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(ShellTemplate {
        progress_bar: page_progress_bar(&state)?,
        heading: "Your account",
        intro: "Track orders, manage addresses and keep an eye on your wishlist.",
        shell_class: "shell--account",
        nav: nav_for(&ACCOUNT_NAV, "/account"),
    })
}

/// Display the admin shell.
///
/// # Errors
///
/// Returns an error if the progress bar fails to render.
#[instrument(skip(state))]
pub async fn admin(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(ShellTemplate {
        progress_bar: page_progress_bar(&state)?,
        heading: "Store admin",
        intro: "Manage the catalog, review orders and issue coupons.",
        shell_class: "shell--admin",
        nav: nav_for(&ADMIN_NAV, "/admin"),
    })
}

/// Create the shell routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/account", get(account))
        .route("/admin", get(admin))
}
