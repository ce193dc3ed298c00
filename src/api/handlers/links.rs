//! Handlers for link management endpoints (list, create, delete).
//!
//! Each handler validates locally where required and relays the backend
//! response. Backend statuses are never reinterpreted, except that any 2xx
//! delete answer becomes a fixed confirmation message.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::api::dto::links::MessageResponse;
use crate::application::services::DeleteOutcome;
use crate::domain::entities::UpstreamResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all short links.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// The backend's status and body, verbatim:
///
/// ```json
/// [
///   {
///     "short_code": "demo",
///     "long_url": "https://example.com",
///     "clicks": 3,
///     "created_at": "2024-05-01T10:00:00Z"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 502 Bad Gateway or 504 Gateway Timeout if the backend cannot be reached.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<UpstreamResponse, AppError> {
    state.link_service.list_links().await
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "short_code": "demo",
///   "long_url": "https://example.com"
/// }
/// ```
///
/// The body is parsed regardless of the request `Content-Type`.
///
/// # Response
///
/// The backend's status and body, verbatim (typically 201 Created, or 409
/// Conflict for a duplicate short code).
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": <reason>}` if the body is not a
/// JSON object or fails validation, 413 if it exceeds the body limit, and
/// 502/504 if the backend cannot be reached.
pub async fn create_link_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<UpstreamResponse, AppError> {
    let body = body?;
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Unparseable link creation body");
        AppError::InvalidBody
    })?;

    state.link_service.create_link(payload).await
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{short_code}`
///
/// # Response
///
/// On any 2xx backend answer:
///
/// ```json
/// { "message": "Link deleted successfully" }
/// ```
///
/// Otherwise the backend's status and body are relayed.
///
/// # Errors
///
/// Returns 400 Bad Request if the path segment is not valid UTF-8, and
/// 502/504 if the backend cannot be reached.
pub async fn delete_link_handler(
    short_code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(short_code) = short_code?;
    let response = match state.link_service.delete_link(&short_code).await? {
        DeleteOutcome::Deleted => Json(MessageResponse::link_deleted()).into_response(),
        DeleteOutcome::Rejected(upstream) => upstream.into_response(),
    };

    Ok(response)
}
