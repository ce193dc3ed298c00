//! Application layer services implementing business logic.
//!
//! Services consume the domain's collaborator traits and provide a clean API
//! for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Validation and forwarding of link operations

pub mod services;
