//! DTOs for link management endpoints.

use serde::{Deserialize, Serialize};

/// Message returned after a successful delete.
pub const LINK_DELETED_MESSAGE: &str = "Link deleted successfully";

/// Generic confirmation message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn link_deleted() -> Self {
        Self {
            message: LINK_DELETED_MESSAGE.to_string(),
        }
    }
}

/// Response of the code generation endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedCodeResponse {
    pub code: String,
}
