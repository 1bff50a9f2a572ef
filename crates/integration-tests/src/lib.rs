//! Integration tests for Herowear.
//!
//! Each test starts the full storefront router on an ephemeral port, with
//! the commerce API replaced by an `httpmock` server, and talks to it over
//! real HTTP.
//!
//! ```bash
//! cargo test -p herowear-integration-tests
//! ```

use std::net::SocketAddr;

use herowear_storefront::config::{CommerceApiConfig, StorefrontConfig};
use herowear_storefront::state::AppState;
use httpmock::MockServer;
use reqwest::Client;
use url::Url;

/// A running storefront wired to a mock commerce API.
pub struct TestContext {
    pub client: Client,
    pub commerce: MockServer,
    pub storefront_url: String,
}

impl TestContext {
    /// Start a mock commerce API and a storefront pointing at it.
    ///
    /// # Panics
    ///
    /// Panics if the storefront cannot bind a local port.
    pub async fn new() -> Self {
        let commerce = MockServer::start_async().await;
        let base_url = Url::parse(&commerce.base_url()).expect("mock server URL");
        let config = StorefrontConfig::new(CommerceApiConfig::new(base_url));
        let state = AppState::new(&config).expect("commerce client builds");

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, herowear_storefront::app(state)).await;
        });

        Self {
            client: Client::new(),
            commerce,
            storefront_url: format!("http://{addr}"),
        }
    }

    /// Absolute storefront URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.storefront_url)
    }
}
