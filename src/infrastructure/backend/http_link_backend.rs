//! `reqwest` implementation of the backing service client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::domain::entities::UpstreamResponse;
use crate::domain::repositories::LinkBackend;
use crate::error::UpstreamError;

/// HTTP client for the backing link-storage service.
///
/// Makes a single attempt per call with no retries. Timeouts are configured
/// on the underlying [`Client`].
#[derive(Debug, Clone)]
pub struct HttpLinkBackend {
    client: Client,
    base_url: Url,
}

impl HttpLinkBackend {
    /// Creates a backend client from an existing [`Client`] and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` cannot carry a path (e.g. `mailto:`).
    pub fn new(client: Client, base_url: Url) -> anyhow::Result<Self> {
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Backend URL '{}' cannot be used as a base", base_url);
        }

        Ok(Self { client, base_url })
    }

    /// Builds a backend client with the timeouts from [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the TLS backend fails
    /// to initialise.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.backend_timeout())
            .connect_timeout(config.backend_connect_timeout())
            .user_agent(concat!("link-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::new(client, config.backend_base_url()?)
    }

    /// Base URL of the backing service.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins path segments onto the base URL, percent-encoding each segment.
    ///
    /// A base path such as `/links-svc/` is preserved.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Unreachable(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and captures status, content type, and body.
    async fn relay(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let response = request
            .send()
            .await
            .map_err(|e| classify_error(operation, e))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                classify_error(operation, e)
            } else {
                tracing::error!(operation, error = %e, "Failed to read backend response body");
                UpstreamError::InvalidResponse(e.to_string())
            }
        })?;

        if !status.is_success() {
            tracing::debug!(operation, status = status.as_u16(), "Backend returned non-success status");
        }

        Ok(UpstreamResponse::new(status, content_type, body))
    }
}

/// Maps a transport error into the gateway's upstream taxonomy.
fn classify_error(operation: &'static str, e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        tracing::warn!(operation, error = %e, "Backend request timed out");
        UpstreamError::Timeout
    } else {
        tracing::error!(operation, error = %e, "Backend request failed");
        UpstreamError::Unreachable(e.to_string())
    }
}

#[async_trait]
impl LinkBackend for HttpLinkBackend {
    async fn list_links(&self) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(&["api", "links"])?;
        self.relay(
            "list_links",
            self.client.get(url).header(ACCEPT, "application/json"),
        )
        .await
    }

    async fn create_link(&self, payload: &Value) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(&["api", "links"])?;
        self.relay("create_link", self.client.post(url).json(payload))
            .await
    }

    async fn delete_link(&self, short_code: &str) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(&["api", "links", short_code])?;
        self.relay("delete_link", self.client.delete(url)).await
    }

    async fn health(&self) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.endpoint(&["health"])?;
        self.relay("health", self.client.get(url)).await
    }
}
