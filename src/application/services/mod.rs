//! Business logic services for the application layer.

pub mod resolve_service;
pub mod shorten_service;

pub use resolve_service::ResolveService;
pub use shorten_service::{ShortenOptions, ShortenService};
