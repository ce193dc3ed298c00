//! Handler for short code generation.

use axum::{Json, extract::State};

use crate::api::dto::links::GeneratedCodeResponse;
use crate::state::AppState;

/// Suggests a random short code.
///
/// # Endpoint
///
/// `GET /api/generate-code`
///
/// # Response
///
/// ```json
/// { "code": "qhxzbe" }
/// ```
///
/// The code is not reserved and may already be taken; the backend rejects
/// duplicates when the link is created.
pub async fn generate_code_handler(State(state): State<AppState>) -> Json<GeneratedCodeResponse> {
    Json(GeneratedCodeResponse {
        code: state.link_service.generate_code(),
    })
}
