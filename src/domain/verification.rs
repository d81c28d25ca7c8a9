//! Human verification port for the shortening flow.

use async_trait::async_trait;

/// Errors that can occur while checking a verification token.
#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("Verification backend unavailable: {0}")]
    Unavailable(String),
}

/// Checks proof-of-humanity tokens attached to creation requests.
///
/// The token is opaque at this level: implementations decide what counts as
/// valid. Callers only learn pass or fail, never why.
///
/// # Implementations
///
/// - [`crate::infrastructure::verification::SharedSecretVerifier`] - Shared-credential check
/// - [`crate::infrastructure::verification::NullVerifier`] - Accepts everything
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HumanVerifier: Send + Sync {
    /// Returns `Ok(true)` when the token proves a human submitter.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::Unavailable`] when the check itself could
    /// not be performed.
    async fn verify(&self, token: &str) -> Result<bool, VerificationError>;
}
