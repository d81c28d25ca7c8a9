//! In-process sliding window rate limiter.

use crate::domain::rate_limit::{Admission, RateLimitError, RateLimitQuota, RateLimiter};
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Sliding window limiter held entirely in process memory.
///
/// Keeps a timestamp log per identity and counts only events younger than the
/// quota window, so a burst ages out gradually instead of resetting on a
/// fixed boundary. The `DashMap` entry lock is held across the prune, the
/// count, and the append, making each admission atomic.
///
/// Budgets are per process: running several instances multiplies the
/// effective limit. Use the Redis limiter when instances share quotas.
#[derive(Default)]
pub struct MemoryRateLimiter {
    windows: DashMap<String, Vec<Instant>>,
}

impl MemoryRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes identities whose events are all older than `max_age`.
    ///
    /// Without this, every identity ever seen keeps a map entry forever.
    pub fn prune(&self, max_age: Duration) {
        let now = Instant::now();
        self.windows.retain(|_, timestamps| {
            timestamps.retain(|t| now.duration_since(*t) < max_age);
            !timestamps.is_empty()
        });
    }

    /// Number of identities currently tracked.
    pub fn tracked_identities(&self) -> usize {
        self.windows.len()
    }
}

#[async_trait]
impl RateLimiter for MemoryRateLimiter {
    async fn admit(
        &self,
        identity: &str,
        quota: RateLimitQuota,
    ) -> Result<Admission, RateLimitError> {
        let now = Instant::now();

        let mut entry = self.windows.entry(identity.to_string()).or_default();
        let timestamps = entry.value_mut();

        // Events exactly one window old no longer count.
        timestamps.retain(|t| now.duration_since(*t) < quota.window);

        let count = timestamps.len() as u32;
        if count < quota.limit {
            timestamps.push(now);
            Ok(Admission::Allowed {
                limit: quota.limit,
                remaining: quota.limit - count - 1,
            })
        } else {
            Ok(Admission::Denied {
                limit: quota.limit,
                remaining: 0,
            })
        }
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const WINDOW: Duration = Duration::from_secs(60);

    fn quota(limit: u32) -> RateLimitQuota {
        RateLimitQuota::new(limit, WINDOW)
    }

    #[tokio::test(start_paused = true)]
    async fn test_admits_until_limit_then_denies() {
        let limiter = MemoryRateLimiter::new();

        for expected_remaining in (0..3).rev() {
            let admission = limiter.admit("203.0.113.7", quota(3)).await.unwrap();
            assert_eq!(
                admission,
                Admission::Allowed {
                    limit: 3,
                    remaining: expected_remaining,
                }
            );
        }

        let denied = limiter.admit("203.0.113.7", quota(3)).await.unwrap();
        assert_eq!(
            denied,
            Admission::Denied {
                limit: 3,
                remaining: 0,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_elapse_readmits() {
        let limiter = MemoryRateLimiter::new();

        limiter.admit("203.0.113.7", quota(1)).await.unwrap();
        let denied = limiter.admit("203.0.113.7", quota(1)).await.unwrap();
        assert!(!denied.is_allowed());

        advance(WINDOW + Duration::from_millis(1)).await;

        let readmitted = limiter.admit("203.0.113.7", quota(1)).await.unwrap();
        assert!(readmitted.is_allowed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_slides_rather_than_resets() {
        let limiter = MemoryRateLimiter::new();

        // Two admissions 30s apart fill a limit of 2.
        limiter.admit("203.0.113.7", quota(2)).await.unwrap();
        advance(Duration::from_secs(30)).await;
        limiter.admit("203.0.113.7", quota(2)).await.unwrap();

        // 31s later the first event has aged out but the second has not,
        // leaving room for exactly one more.
        advance(Duration::from_secs(31)).await;
        let third = limiter.admit("203.0.113.7", quota(2)).await.unwrap();
        assert!(third.is_allowed());

        let fourth = limiter.admit("203.0.113.7", quota(2)).await.unwrap();
        assert!(!fourth.is_allowed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_identities_have_independent_budgets() {
        let limiter = MemoryRateLimiter::new();

        let denied = limiter.admit("203.0.113.7", quota(1)).await.unwrap();
        assert!(denied.is_allowed());
        assert!(!limiter.admit("203.0.113.7", quota(1)).await.unwrap().is_allowed());

        // A different identity is untouched by the first one's exhaustion.
        let other = limiter.admit("198.51.100.9", quota(1)).await.unwrap();
        assert!(other.is_allowed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_denied_attempts_do_not_consume_budget() {
        let limiter = MemoryRateLimiter::new();

        limiter.admit("203.0.113.7", quota(1)).await.unwrap();
        for _ in 0..5 {
            limiter.admit("203.0.113.7", quota(1)).await.unwrap();
        }

        // Only the single allowed event occupies the window, so one window
        // after it the identity is clean again.
        advance(WINDOW + Duration::from_millis(1)).await;
        let readmitted = limiter.admit("203.0.113.7", quota(1)).await.unwrap();
        assert!(readmitted.is_allowed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_prune_forgets_idle_identities() {
        let limiter = MemoryRateLimiter::new();

        limiter.admit("203.0.113.7", quota(3)).await.unwrap();
        limiter.admit("198.51.100.9", quota(3)).await.unwrap();
        assert_eq!(limiter.tracked_identities(), 2);

        advance(WINDOW * 2).await;
        limiter.admit("198.51.100.9", quota(3)).await.unwrap();
        limiter.prune(WINDOW);

        assert_eq!(limiter.tracked_identities(), 1);
    }
}
