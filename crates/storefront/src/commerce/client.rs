//! Shared HTTP plumbing for the commerce API.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ClientBuildError, DiagnosticSink, RemoteCallFailure, TracingSink};
use crate::config::CommerceApiConfig;

const CLIENT_USER_AGENT: &str = concat!("herowear-storefront/", env!("CARGO_PKG_VERSION"));

/// Client for the remote commerce API.
///
/// Cheap to clone; all clones share one connection pool and sink.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<CommerceClientInner>,
}

struct CommerceClientInner {
    client: reqwest::Client,
    base_url: String,
    sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for CommerceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl CommerceClient {
    /// Create a client that reports failures through [`TracingSink`].
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &CommerceApiConfig) -> Result<Self, ClientBuildError> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a client that reports failures to `sink`.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn with_sink(
        config: &CommerceApiConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, ClientBuildError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        if let Some(token) = &config.api_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(CommerceClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                sink,
            }),
        })
    }

    /// Absolute URL for an API path such as `/coupons/verify`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// POST `body` as JSON to `path` and decode the response.
    ///
    /// Failures are reported to the sink once, then returned unchanged.
    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, RemoteCallFailure>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match self.send(path, body).await {
            Ok(response) => Ok(response),
            Err(failure) => {
                self.inner.sink.remote_call_failed(path, &failure);
                Err(failure)
            }
        }
    }

    async fn send<B, R>(&self, path: &str, body: &B) -> Result<R, RemoteCallFailure>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "POST commerce API");

        let response = self.inner.client.post(&url).json(body).send().await?;
        let status = response.status();

        // Read as text first so failures keep the body for diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(RemoteCallFailure::status(status, &response_text));
        }

        Ok(serde_json::from_str(&response_text)?)
    }
}
