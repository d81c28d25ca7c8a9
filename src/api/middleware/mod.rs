//! Middleware applied around the endpoint handlers.
//!
//! Admission control for the creation path and request tracing for
//! everything.

pub mod rate_limit;
pub mod tracing;
