//! No-op rate limiter for disabled admission control.

use crate::domain::rate_limit::{Admission, RateLimitError, RateLimitQuota, RateLimiter};
use async_trait::async_trait;
use tracing::debug;

/// A rate limiter that admits every request.
///
/// Used when rate limiting is explicitly disabled. Every admission reports a
/// full remaining budget and nothing is ever recorded.
///
/// # Use Cases
///
/// - Development environments where throttling gets in the way
/// - Load testing against a single instance
pub struct NullRateLimiter;

impl NullRateLimiter {
    /// Creates a new NullRateLimiter instance.
    pub fn new() -> Self {
        debug!("Using NullRateLimiter (rate limiting disabled)");
        Self
    }
}

impl Default for NullRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateLimiter for NullRateLimiter {
    async fn admit(
        &self,
        _identity: &str,
        quota: RateLimitQuota,
    ) -> Result<Admission, RateLimitError> {
        Ok(Admission::Allowed {
            limit: quota.limit,
            remaining: quota.limit,
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
