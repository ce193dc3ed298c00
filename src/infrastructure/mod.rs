//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`backend`] - HTTP client for the backing link-storage service

pub mod backend;
