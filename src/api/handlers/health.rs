//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns gateway health with a backend reachability check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Backend health endpoint answered 2xx
/// - **503 Service Unavailable**: Backend unreachable or unhealthy
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "backend": { "status": "ok" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend_check = check_backend(&state).await;

    let healthy = backend_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            backend: backend_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the backing service's health endpoint.
async fn check_backend(state: &AppState) -> CheckStatus {
    match state.link_service.backend_health().await {
        Ok(response) if response.is_success() => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Ok(response) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Backend returned {}", response.status)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.public_message().to_string()),
        },
    }
}
