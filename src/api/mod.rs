//! HTTP layer: request decoding, response encoding, admission control.
//!
//! Everything HTTP-specific lives here; handlers delegate the actual work to
//! the application services and map their results onto the wire format.
//!
//! # Modules
//!
//! - [`dto`] - Request and response body types
//! - [`handlers`] - Endpoint handlers
//! - [`middleware`] - Rate limiting and request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
