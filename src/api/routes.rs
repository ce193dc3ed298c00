//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, generate_code_handler, list_links_handler,
    method_not_allowed_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All API routes, nested under `/api` by the top-level router.
///
/// # Endpoints
///
/// - `GET    /links`               - List links (relayed from the backend)
/// - `POST   /links`               - Validate and create a link
/// - `DELETE /links/{short_code}`  - Delete a link
/// - `GET    /generate-code`       - Suggest a random short code
///
/// Any other method on these paths answers `405 {"error": "Method not allowed"}`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{short_code}", delete(delete_link_handler))
        .route("/generate-code", get(generate_code_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
}
