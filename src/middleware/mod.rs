//! Middleware layer.
//!
//! Cross-cutting concerns wrapped around every routed request by
//! [`Router::handle`](crate::Router::handle):
//!
//! - [`recover`]: a panicking handler becomes `500 Internal Server Error`
//!   instead of tearing down the connection
//! - [`trace`]: one log event per request with method, path, status, latency

pub mod recover;
pub mod trace;
