//! HTTP API layer.

pub mod http;

pub use http::{routes, ApiError};
