//! Handlers for unmatched routes and methods.

use crate::error::AppError;

/// Returns `404 {"error": "Not found"}` for any unknown path.
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

/// Returns `405 {"error": "Method not allowed"}` when the path exists but the
/// method does not.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
