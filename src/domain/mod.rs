//! Domain layer containing entities, validation rules, and collaborator traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Trait for the backing link-storage service
//! - [`validation`] - Rules for link creation requests
//!
//! The domain layer has no dependency on the infrastructure or API layers.

pub mod entities;
pub mod repositories;
pub mod validation;
