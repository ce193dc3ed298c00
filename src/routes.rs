//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Gateway and backend health (public)
//! - `/api/*`        - Link management API
//! - anything else   - `404 {"error": "Not found"}`
//! - wrong method    - `405 {"error": "Method not allowed"}`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, allowed methods and headers on every response;
//!   `OPTIONS` on any path answers 200 with no body
//!
//! Trailing slash normalization is applied around the router in
//! [`crate::server::run`].

use crate::api;
use crate::api::handlers::{health_handler, method_not_allowed_handler, not_found_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(middleware::from_fn(cors::preflight))
        .layer(cors::allow_headers_header())
        .layer(cors::allow_methods_header())
        .layer(cors::layer())
        .layer(tracing::layer())
}
