//! Human verifier implementations.
//!
//! Concrete implementations of [`crate::domain::verification::HumanVerifier`].
//!
//! # Verifiers
//!
//! - [`SharedSecretVerifier`] - Accepts tokens matching a shared credential
//! - [`NullVerifier`] - Accepts everything

pub mod null;
pub mod shared_secret;

pub use null::NullVerifier;
pub use shared_secret::SharedSecretVerifier;
