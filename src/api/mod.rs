//! Service-level HTTP endpoints and cross-cutting middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`handlers`] - Health check handler
//! - [`middleware`] - Request tracing and rate limiting

pub mod dto;
pub mod handlers;
pub mod middleware;
