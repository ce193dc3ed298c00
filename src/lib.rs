//! # Link Gateway
//!
//! A validating intake gateway for a link-shortening service, built with Axum.
//!
//! The gateway accepts requests to create, list, and delete short links,
//! validates them, and forwards accepted operations to a backing link-storage
//! service. Storage, redirects, and click counting belong to that service;
//! this crate only validates and relays.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, validation rules, backend trait
//! - **Application Layer** ([`application`]) - Validation and forwarding service
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the backing service
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export LINK_BACKEND_URL="http://localhost:8080"  # Optional, this is the default
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DeleteOutcome, LinkService};
    pub use crate::domain::entities::{LinkCreateRequest, LinkRecord, UpstreamResponse};
    pub use crate::error::{AppError, UpstreamError};
    pub use crate::infrastructure::backend::HttpLinkBackend;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
