//! No-op verifier for disabled human verification.

use crate::domain::verification::{HumanVerifier, VerificationError};
use async_trait::async_trait;
use tracing::debug;

/// A verifier that accepts every token.
///
/// Used when human verification is explicitly disabled.
///
/// # Use Cases
///
/// - Development environments without a verification credential
/// - Test scenarios exercising the rest of the creation flow
pub struct NullVerifier;

impl NullVerifier {
    /// Creates a new NullVerifier instance.
    pub fn new() -> Self {
        debug!("Using NullVerifier (human verification disabled)");
        Self
    }
}

impl Default for NullVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HumanVerifier for NullVerifier {
    async fn verify(&self, _token: &str) -> Result<bool, VerificationError> {
        Ok(true)
    }
}
