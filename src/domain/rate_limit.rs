//! Admission control port for rate limiting.

use async_trait::async_trait;
use std::time::Duration;

/// Quota applied to one identity: at most `limit` admissions within any
/// trailing `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitQuota {
    pub limit: u32,
    pub window: Duration,
}

impl RateLimitQuota {
    pub const fn new(limit: u32, window: Duration) -> Self {
        Self { limit, window }
    }
}

impl Default for RateLimitQuota {
    /// General service quota: 200 admissions per 15 minutes.
    fn default() -> Self {
        Self::new(200, Duration::from_secs(900))
    }
}

/// Outcome of a single admission check.
///
/// Both variants carry the quota limit and the admissions left in the current
/// window so callers can report budget state either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed { limit: u32, remaining: u32 },
    Denied { limit: u32, remaining: u32 },
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed { .. })
    }

    pub fn limit(&self) -> u32 {
        match self {
            Admission::Allowed { limit, .. } | Admission::Denied { limit, .. } => *limit,
        }
    }

    pub fn remaining(&self) -> u32 {
        match self {
            Admission::Allowed { remaining, .. } | Admission::Denied { remaining, .. } => *remaining,
        }
    }
}

/// Errors that can occur while consulting the rate limit backend.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit backend unavailable: {0}")]
    Unavailable(String),
}

/// Admission control interface.
///
/// A call both decides and records: an allowed admission is counted against
/// the identity's window in the same atomic step that checked it, so two
/// concurrent calls can never both consume the last slot.
///
/// # Implementations
///
/// - [`crate::infrastructure::rate_limit::RedisRateLimiter`] - Redis sorted-set implementation
/// - [`crate::infrastructure::rate_limit::MemoryRateLimiter`] - In-process implementation
/// - [`crate::infrastructure::rate_limit::NullRateLimiter`] - Admits everything
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Decides one admission for `identity` under `quota`.
    ///
    /// Identities are opaque keys with fully independent budgets.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitError::Unavailable`] when the backend cannot be
    /// consulted. The caller decides whether that fails open or closed.
    async fn admit(&self, identity: &str, quota: RateLimitQuota)
    -> Result<Admission, RateLimitError>;

    /// Probes whether the limiter backend is reachable.
    async fn health_check(&self) -> bool;
}
