//! Error taxonomy and its translation into HTTP responses.
//!
//! Every error response is JSON with a single `error` field:
//!
//! ```json
//! { "error": "Invalid URL format" }
//! ```
//!
//! Transport details of upstream failures are logged, never returned.

use axum::{
    Json,
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Failure to obtain any response from the backing service.
///
/// A backend that answers with a non-2xx status is **not** an `UpstreamError`;
/// that response is relayed as is.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    #[error("upstream response unreadable: {0}")]
    InvalidResponse(String),
}

impl UpstreamError {
    /// HTTP status returned to the caller for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            UpstreamError::Unreachable(_) | UpstreamError::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Generic message safe to expose to API clients.
    pub fn public_message(&self) -> &'static str {
        match self {
            UpstreamError::Timeout => "Upstream service timed out",
            UpstreamError::Unreachable(_) | UpstreamError::InvalidResponse(_) => {
                "Upstream service unavailable"
            }
        }
    }
}

/// Application error returned by handlers and services.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request body")]
    InvalidBody,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Invalid request path")]
    InvalidPath,

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidBody | AppError::InvalidPath => {
                StatusCode::BAD_REQUEST
            }
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream(e) => e.status_code(),
        }
    }

    /// Converts the error into its public JSON body.
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            AppError::Upstream(e) => ErrorBody::new(e.public_message()),
            other => ErrorBody::new(other.to_string()),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Request body rejected");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InvalidBody
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Request path rejected");
        AppError::InvalidPath
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}
