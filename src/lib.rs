//! # Linkcut
//!
//! A small URL shortening service with expiring links, built with Axum and Redis.
//!
//! ## Architecture
//!
//! The crate is split into the usual clean layers:
//!
//! - [`domain`] - the [`Mapping`](domain::entities::Mapping) entity plus the
//!   repository, rate limiter and verifier traits everything is wired through
//! - [`application`] - the shorten and resolve services
//! - [`infrastructure`] - Redis and in-memory implementations of the domain traits
//! - [`api`] - Axum handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Short links that lazily expire after a configurable retention period
//! - Sliding-window rate limiting on link creation
//! - Optional human verification gate backed by a shared secret
//! - Redis storage with an in-memory fallback for local development
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # optional, in-memory otherwise
//! cargo run
//! ```
//!
//! All settings come from environment variables; see [`config`] for the full
//! list and their defaults.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// One-stop imports for integration tests and embedding callers.
pub mod prelude {
    pub use crate::application::services::{ResolveService, ShortenOptions, ShortenService};
    pub use crate::domain::entities::Mapping;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
