//! Redis-backed sliding window rate limiter.

use crate::domain::rate_limit::{Admission, RateLimitError, RateLimitQuota, RateLimiter};
use async_trait::async_trait;
use chrono::Utc;
use redis::aio::ConnectionManager;
use redis::Script;
use tracing::debug;

/// Prunes the identity's event log, counts it, and records the admission if
/// the quota allows, all in one atomic script invocation.
///
/// KEYS[1] = identity window key
/// ARGV[1] = now (ms), ARGV[2] = window (ms), ARGV[3] = limit, ARGV[4] = member
///
/// Returns {1, remaining} when admitted, {0, 0} when denied.
const SLIDING_WINDOW_SCRIPT: &str = r"
local key = KEYS[1]
local now = tonumber(ARGV[1])
local window = tonumber(ARGV[2])
local limit = tonumber(ARGV[3])

redis.call('ZREMRANGEBYSCORE', key, '-inf', now - window)
local count = redis.call('ZCARD', key)
if count < limit then
    redis.call('ZADD', key, now, ARGV[4])
    redis.call('PEXPIRE', key, window)
    return {1, limit - count - 1}
end
return {0, 0}
";

/// Sliding window limiter backed by a Redis sorted set per identity.
///
/// Admission events are members scored by their wall-clock millisecond
/// timestamp. Because the count and the insert happen inside one Lua script,
/// instances sharing the Redis enforce one combined quota per identity.
pub struct RedisRateLimiter {
    conn: ConnectionManager,
    script: Script,
    key_prefix: String,
}

impl RedisRateLimiter {
    /// Wraps an established connection manager.
    pub fn new(conn: ConnectionManager) -> Self {
        Self {
            conn,
            script: Script::new(SLIDING_WINDOW_SCRIPT),
            key_prefix: "ratelimit:".to_string(),
        }
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, identity: &str) -> String {
        format!("{}{}", self.key_prefix, identity)
    }

    /// Sorted-set members must be unique per event; the timestamp alone
    /// collides when one identity sends two requests in the same millisecond.
    fn event_member(now_ms: i64) -> String {
        let mut entropy = [0u8; 4];
        getrandom::fill(&mut entropy).expect("Failed to generate random bytes");
        format!("{}-{}", now_ms, hex::encode(entropy))
    }
}

#[async_trait]
impl RateLimiter for RedisRateLimiter {
    async fn admit(
        &self,
        identity: &str,
        quota: RateLimitQuota,
    ) -> Result<Admission, RateLimitError> {
        let now_ms = Utc::now().timestamp_millis();
        let window_ms = quota.window.as_millis() as i64;
        let key = self.build_key(identity);

        let mut conn = self.conn.clone();
        let (admitted, remaining): (i64, i64) = self
            .script
            .key(&key)
            .arg(now_ms)
            .arg(window_ms)
            .arg(quota.limit)
            .arg(Self::event_member(now_ms))
            .invoke_async(&mut conn)
            .await
            .map_err(|e| RateLimitError::Unavailable(e.to_string()))?;

        if admitted == 1 {
            debug!("Admit {}: {} remaining", identity, remaining);
            Ok(Admission::Allowed {
                limit: quota.limit,
                remaining: remaining as u32,
            })
        } else {
            debug!("Deny {}: window full", identity);
            Ok(Admission::Denied {
                limit: quota.limit,
                remaining: 0,
            })
        }
    }

    async fn health_check(&self) -> bool {
        use redis::AsyncCommands;

        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
