//! Contract for the backing link-storage service.

use crate::domain::entities::UpstreamResponse;
use crate::error::UpstreamError;
use async_trait::async_trait;
use serde_json::Value;

/// Client interface for the external service that owns link storage,
/// redirects, and click counts.
///
/// Every method makes exactly one attempt. A reachable backend answering with
/// any status yields `Ok`; only transport failures yield `Err`.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpLinkBackend`] - JSON over HTTP via `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkBackend: Send + Sync {
    /// Fetches all link records (`GET /api/links`).
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the backend cannot be reached, times out,
    /// or its response body cannot be read.
    async fn list_links(&self) -> Result<UpstreamResponse, UpstreamError>;

    /// Submits a validated creation payload (`POST /api/links`).
    ///
    /// Uniqueness of the short code is enforced by the backend, which answers
    /// with a conflict status on duplicates.
    ///
    /// # Errors
    ///
    /// See [`Self::list_links`].
    async fn create_link(&self, payload: &Value) -> Result<UpstreamResponse, UpstreamError>;

    /// Deletes a link by short code (`DELETE /api/links/{code}`).
    ///
    /// # Errors
    ///
    /// See [`Self::list_links`].
    async fn delete_link(&self, short_code: &str) -> Result<UpstreamResponse, UpstreamError>;

    /// Probes the backend health endpoint (`GET /health`).
    ///
    /// # Errors
    ///
    /// See [`Self::list_links`].
    async fn health(&self) -> Result<UpstreamResponse, UpstreamError>;
}
