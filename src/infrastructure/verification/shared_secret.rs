//! Shared-credential human verification.

use crate::domain::verification::{HumanVerifier, VerificationError};
use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifier that accepts tokens matching a configured shared secret.
///
/// Tokens are compared through their HMAC-SHA256 digests rather than
/// directly, so the comparison never short-circuits on a prefix of the
/// secret. All holders of the credential share it; there is no per-client
/// identity here, only a deploy-wide gate against drive-by submissions.
pub struct SharedSecretVerifier {
    secret: String,
    expected_digest: String,
}

impl SharedSecretVerifier {
    /// Creates a verifier for the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        let expected_digest = Self::digest(&secret, &secret);
        Self {
            secret,
            expected_digest,
        }
    }

    /// Hashes `value` with HMAC-SHA256 keyed by the shared secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn digest(secret: &str, value: &str) -> String {
        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
        mac.update(value.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

#[async_trait]
impl HumanVerifier for SharedSecretVerifier {
    async fn verify(&self, token: &str) -> Result<bool, VerificationError> {
        Ok(Self::digest(&self.secret, token) == self.expected_digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matching_token_passes() {
        let verifier = SharedSecretVerifier::new("deploy-secret");
        assert!(verifier.verify("deploy-secret").await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_token_fails() {
        let verifier = SharedSecretVerifier::new("deploy-secret");
        assert!(!verifier.verify("guessed-secret").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_token_fails() {
        let verifier = SharedSecretVerifier::new("deploy-secret");
        assert!(!verifier.verify("").await.unwrap());
    }

    #[tokio::test]
    async fn test_prefix_of_secret_fails() {
        let verifier = SharedSecretVerifier::new("deploy-secret");
        assert!(!verifier.verify("deploy").await.unwrap());
    }

    #[test]
    fn test_digest_is_hex_sha256_sized() {
        let digest = SharedSecretVerifier::digest("key", "value");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_depends_on_secret() {
        assert_ne!(
            SharedSecretVerifier::digest("secret-a", "token"),
            SharedSecretVerifier::digest("secret-b", "token")
        );
    }
}
