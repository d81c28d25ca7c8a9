//! Application layer: the use cases of the service.
//!
//! Services here hold the injected domain ports and run the actual flows
//! (gate sequences, retries, URL assembly). Handlers stay thin by calling
//! into these.
//!
//! - [`services::shorten_service::ShortenService`] - Mapping creation with its gate sequence
//! - [`services::resolve_service::ResolveService`] - Read-only identifier resolution

pub mod services;
