//! Shared types for the Ñam Ñam demo server
//!
//! Entity models, create payloads and the API response envelope used by
//! both the server and its integration tests.

pub mod models;
pub mod response;

pub use response::ApiResponse;
