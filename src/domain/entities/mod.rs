//! Domain entities.
//!
//! Plain data structures carrying the state the service persists. Behavior
//! beyond simple derived properties lives in the application services.
//!
//! - [`Mapping`] - A shortened URL with its target and lifetime

pub mod mapping;

pub use mapping::Mapping;
