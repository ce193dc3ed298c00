//! Cross-origin resource sharing.
//!
//! Every response allows any origin and advertises the allowed methods and
//! headers. Browser preflights are answered by [`layer`]; any other `OPTIONS`
//! request is short-circuited by [`preflight`] with an empty 200, whether or
//! not a route exists for the path.

use axum::{
    extract::Request,
    http::{
        HeaderValue, Method, StatusCode,
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_TYPE},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Permissive CORS policy: any origin, link-management methods, JSON bodies.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

/// Adds `Access-Control-Allow-Methods` to responses that are not preflights.
pub fn allow_methods_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    )
}

/// Adds `Access-Control-Allow-Headers` to responses that are not preflights.
pub fn allow_headers_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}

/// Answers `OPTIONS` on any path with `200 OK` and no body.
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}
