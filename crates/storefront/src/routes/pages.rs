//! Marketing page route handlers.
//!
//! Every page embeds the scroll progress bar at its initial position.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, response::IntoResponse, routing::get};
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// A member of the team page.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub alias: &'static str,
    pub role: &'static str,
}

/// Team shown on `/team`.
pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Maya Ortiz",
        alias: "The Stitch",
        role: "Founder & Head of Design",
    },
    TeamMember {
        name: "Dev Patel",
        alias: "Captain Cotton",
        role: "Production",
    },
    TeamMember {
        name: "Jo Okafor",
        alias: "Dispatch",
        role: "Customer Care",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub progress_bar: String,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub progress_bar: String,
}

/// Team page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/team.html")]
pub struct TeamTemplate {
    pub progress_bar: String,
    pub team: &'static [TeamMember],
}

/// Render the scroll progress bar markup shared by every page.
pub(crate) fn page_progress_bar(state: &AppState) -> Result<String> {
    Ok(state.scroll_progress().initial_bar().render()?)
}

/// Display the home page.
///
/// # Errors
///
/// Returns an error if the progress bar fails to render.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(HomeTemplate {
        progress_bar: page_progress_bar(&state)?,
    })
}

/// Display the About page.
///
/// # Errors
///
/// Returns an error if the progress bar fails to render.
#[instrument(skip(state))]
pub async fn about(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(AboutTemplate {
        progress_bar: page_progress_bar(&state)?,
    })
}

/// Display the Team page.
///
/// # Errors
///
/// Returns an error if the progress bar fails to render.
#[instrument(skip(state))]
pub async fn team(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(TeamTemplate {
        progress_bar: page_progress_bar(&state)?,
        team: TEAM,
    })
}

/// Create the pages routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/team", get(team))
}
