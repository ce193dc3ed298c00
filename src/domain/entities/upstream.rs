//! Response received from the backing link-storage service.

use axum::body::Bytes;
use axum::http::StatusCode;

/// A backend response relayed to the caller unchanged.
///
/// Non-2xx statuses are not errors at this level: a conflict or not-found
/// answered by the backing service is passed through with its own status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamResponse {
    /// Creates a new upstream response.
    pub fn new(status: StatusCode, content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Shorthand for a JSON response, mostly useful in tests and stubs.
    pub fn json(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self::new(status, Some("application/json".to_string()), body)
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
