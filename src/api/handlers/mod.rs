//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod generate_code;
pub mod health;
pub mod links;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use generate_code::generate_code_handler;
pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler, list_links_handler};
