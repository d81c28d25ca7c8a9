//! Domain layer: entities and the ports the rest of the system plugs into.
//!
//! Nothing in here touches Redis, axum, or any other infrastructure concern.
//! The layer owns the data model and the trait contracts; everything concrete
//! implements them from the outside.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait contracts
//! - [`rate_limit`] - Admission control port
//! - [`verification`] - Human verification port
//!
//! Orchestration of these pieces lives in [`crate::application::services`].

pub mod entities;
pub mod rate_limit;
pub mod repositories;
pub mod verification;
