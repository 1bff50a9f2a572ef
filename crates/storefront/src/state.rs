//! Application state shared across handlers.

use std::sync::Arc;

use crate::commerce::{ClientBuildError, CommerceClient};
use crate::components::ScrollProgressIndicator;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the commerce client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    commerce: CommerceClient,
    scroll_progress: ScrollProgressIndicator,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce client cannot be built from the
    /// configuration.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ClientBuildError> {
        let commerce = CommerceClient::new(&config.commerce)?;
        Ok(Self::with_commerce(commerce))
    }

    /// Create application state around an existing commerce client.
    #[must_use]
    pub fn with_commerce(commerce: CommerceClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                commerce,
                scroll_progress: ScrollProgressIndicator::default(),
            }),
        }
    }

    /// Get a reference to the commerce API client.
    #[must_use]
    pub fn commerce(&self) -> &CommerceClient {
        &self.inner.commerce
    }

    /// Get the page-level scroll progress indicator.
    #[must_use]
    pub fn scroll_progress(&self) -> &ScrollProgressIndicator {
        &self.inner.scroll_progress
    }
}
