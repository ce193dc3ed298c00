//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and relays backend
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies produced by the gateway itself
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing middleware
//! - [`relay`] - Conversion of relayed backend responses
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod relay;
pub mod routes;
