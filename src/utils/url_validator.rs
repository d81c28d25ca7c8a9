//! Target URL validation.
//!
//! Checks that a submitted URL is absolute and uses a web protocol. The
//! original string is never rewritten: whatever the caller submits is what a
//! redirect will later send back, byte for byte.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a URL submitted for shortening.
///
/// # Rules
///
/// - Must parse as an absolute URL
/// - Scheme must be `http` or `https`
///
/// Relative references, bare hostnames, and dangerous schemes like
/// `javascript:` or `data:` are all rejected.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}
