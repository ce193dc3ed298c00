//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::backend::HttpLinkBackend;

/// Immutable state shared by all requests.
///
/// Cloning is cheap; the service sits behind an [`Arc`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<HttpLinkBackend>>,
}

impl AppState {
    /// Creates application state around a configured backend client.
    pub fn new(backend: HttpLinkBackend) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(Arc::new(backend))),
        }
    }
}
