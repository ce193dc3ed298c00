//! Client for the backing link-storage service.

pub mod http_link_backend;

pub use http_link_backend::HttpLinkBackend;
