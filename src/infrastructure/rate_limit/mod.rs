//! Rate limiter implementations.
//!
//! Concrete implementations of [`crate::domain::rate_limit::RateLimiter`].
//!
//! # Limiters
//!
//! - [`RedisRateLimiter`] - Shared sliding window across instances
//! - [`MemoryRateLimiter`] - Per-process sliding window
//! - [`NullRateLimiter`] - Admits everything

pub mod memory;
pub mod null;
pub mod redis;

pub use memory::MemoryRateLimiter;
pub use null::NullRateLimiter;
pub use redis::RedisRateLimiter;
