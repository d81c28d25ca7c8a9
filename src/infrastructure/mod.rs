//! Concrete backends behind the domain ports.
//!
//! Every trait the domain layer declares gets its implementations here, so
//! swapping Redis for the in-memory twins is a wiring decision in
//! `server::run`, not a code change.
//!
//! - [`persistence`] - Mapping store implementations (Redis and in-memory)
//! - [`rate_limit`] - Rate limiter implementations (Redis, in-memory, no-op)
//! - [`verification`] - Human verifier implementations

pub mod persistence;
pub mod rate_limit;
pub mod verification;
