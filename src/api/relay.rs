//! Conversion of relayed backend responses into HTTP responses.

use axum::http::{HeaderValue, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use crate::domain::entities::UpstreamResponse;

impl IntoResponse for UpstreamResponse {
    /// Relays status and body unchanged.
    ///
    /// The backend content type is kept when present and valid, otherwise the
    /// response is labelled as JSON.
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .as_deref()
            .and_then(|v| HeaderValue::from_str(v).ok())
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        let mut response = (self.status, self.body).into_response();
        response.headers_mut().insert(CONTENT_TYPE, content_type);
        response
    }
}
