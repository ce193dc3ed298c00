//! Trait definitions for external collaborators of the domain layer.
//!
//! The gateway owns no storage. Its only collaborator is the backing
//! link-storage service, abstracted by [`LinkBackend`] and implemented in
//! `crate::infrastructure::backend`.
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod link_backend;

pub use link_backend::LinkBackend;

#[cfg(test)]
pub use link_backend::MockLinkBackend;
