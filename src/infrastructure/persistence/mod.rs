//! Mapping store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::MappingRepository`].
//!
//! # Stores
//!
//! - [`RedisMappingStore`] - Durable store with TTL-based expiry
//! - [`MemoryMappingStore`] - In-process store for development and tests

pub mod memory;
pub mod redis;

pub use memory::MemoryMappingStore;
pub use redis::RedisMappingStore;
