//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`LinkCreateRequest`] - An incoming request to create a short link
//! - [`LinkRecord`] - A link as stored by the backing service
//! - [`UpstreamResponse`] - A backing service response relayed to the caller

pub mod link;
pub mod upstream;

pub use link::{LinkCreateRequest, LinkRecord};
pub use upstream::UpstreamResponse;
