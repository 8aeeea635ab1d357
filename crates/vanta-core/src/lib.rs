//! Shared service plumbing: health endpoints, request-id middleware,
//! password hashing, serde helpers, and tracing setup.

pub mod health;
pub mod middleware;
pub mod password;
pub mod serde;
pub mod tracing;
