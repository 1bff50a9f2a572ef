//! Component fragment route handlers.
//!
//! Return bare component markup for HTMX swaps.

use axum::{
    Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use herowear_core::{Progress, ScrollGeometry};
use serde::Deserialize;
use tracing::instrument;

use crate::components::ProgressBar;
use crate::state::AppState;

/// Query for `/components/progress-bar`.
#[derive(Debug, Deserialize)]
pub struct ProgressBarQuery {
    #[serde(default)]
    pub value: Progress,
    pub track_class: Option<String>,
    pub fill_class: Option<String>,
    pub label: Option<String>,
}

/// Query for `/components/scroll-progress`.
#[derive(Debug, Deserialize)]
pub struct ScrollProgressQuery {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Render a progress bar for an arbitrary value.
#[instrument]
pub async fn progress_bar(Query(query): Query<ProgressBarQuery>) -> impl IntoResponse {
    let mut bar = ProgressBar::new(query.value);
    if let Some(class) = query.track_class {
        bar = bar.with_track_class(class);
    }
    if let Some(class) = query.fill_class {
        bar = bar.with_fill_class(class);
    }
    if let Some(label) = query.label {
        bar = bar.with_label(label);
    }
    bar
}

/// Render the page scroll indicator for a reported scroll geometry.
#[instrument(skip(state))]
pub async fn scroll_progress(
    State(state): State<AppState>,
    Query(query): Query<ScrollProgressQuery>,
) -> impl IntoResponse {
    state.scroll_progress().bar_for(ScrollGeometry::new(
        query.scroll_top,
        query.scroll_height,
        query.client_height,
    ))
}

/// Create the component fragment routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/progress-bar", get(progress_bar))
        .route("/scroll-progress", get(scroll_progress))
}
