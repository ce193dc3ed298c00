//! Data Transfer Objects for API responses.
//!
//! Request bodies for link creation are not modelled here: they are parsed as
//! raw JSON so the validated payload can be forwarded untouched.

pub mod health;
pub mod links;
