#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use linkcut::domain::rate_limit::{Admission, RateLimitError, RateLimitQuota, RateLimiter};
use linkcut::domain::repositories::MappingRepository;
use linkcut::domain::verification::HumanVerifier;
use linkcut::infrastructure::persistence::MemoryMappingStore;
use linkcut::infrastructure::rate_limit::{MemoryRateLimiter, NullRateLimiter};
use linkcut::infrastructure::verification::{NullVerifier, SharedSecretVerifier};
use linkcut::prelude::*;

pub const TEST_BASE_URL: &str = "http://sho.rt";
pub const TEST_SECRET: &str = "test-verification-secret";

/// Limiter stub whose backend is permanently down.
pub struct UnavailableRateLimiter;

#[async_trait]
impl RateLimiter for UnavailableRateLimiter {
    async fn admit(
        &self,
        _identity: &str,
        _quota: RateLimitQuota,
    ) -> Result<Admission, RateLimitError> {
        Err(RateLimitError::Unavailable(
            "connection refused".to_string(),
        ))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Generous quota so creation tests never trip the limiter by accident.
pub fn open_quota() -> RateLimitQuota {
    RateLimitQuota::new(1_000, Duration::from_secs(60))
}

/// State backed by in-memory storage, verification off.
///
/// Returns the store alongside so tests can seed and inspect records
/// directly.
pub fn create_test_state() -> (AppState, Arc<MemoryMappingStore>) {
    create_test_state_with_quota(open_quota())
}

/// State with an explicit creation quota, verification off.
pub fn create_test_state_with_quota(
    quota: RateLimitQuota,
) -> (AppState, Arc<MemoryMappingStore>) {
    build_state(quota, Arc::new(NullVerifier), false, limiter(), false)
}

/// State with the human verification gate enabled under [`TEST_SECRET`].
pub fn create_verified_test_state() -> (AppState, Arc<MemoryMappingStore>) {
    build_state(
        open_quota(),
        Arc::new(SharedSecretVerifier::new(TEST_SECRET)),
        true,
        limiter(),
        false,
    )
}

/// State whose rate limiter backend always errors.
pub fn create_limiter_outage_state(fail_open: bool) -> (AppState, Arc<MemoryMappingStore>) {
    build_state(
        open_quota(),
        Arc::new(NullVerifier),
        false,
        Arc::new(UnavailableRateLimiter),
        fail_open,
    )
}

/// State with rate limiting switched off entirely.
pub fn create_unlimited_test_state() -> (AppState, Arc<MemoryMappingStore>) {
    build_state(
        RateLimitQuota::new(1, Duration::from_secs(60)),
        Arc::new(NullVerifier),
        false,
        Arc::new(NullRateLimiter::new()),
        false,
    )
}

fn limiter() -> Arc<dyn RateLimiter> {
    Arc::new(MemoryRateLimiter::new())
}

/// Mirrors how `server::run` wires production state.
fn build_state(
    quota: RateLimitQuota,
    verifier: Arc<dyn HumanVerifier>,
    require_verification: bool,
    rate_limiter: Arc<dyn RateLimiter>,
    rate_limit_fail_open: bool,
) -> (AppState, Arc<MemoryMappingStore>) {
    let store = Arc::new(MemoryMappingStore::new());
    let mapping_store: Arc<dyn MappingRepository> = store.clone();

    let shorten_service = Arc::new(ShortenService::new(
        mapping_store.clone(),
        verifier,
        ShortenOptions {
            base_url: TEST_BASE_URL.to_string(),
            retention: chrono::Duration::days(7),
            require_verification,
        },
    ));
    let resolve_service = Arc::new(ResolveService::new(mapping_store.clone()));

    let state = AppState {
        shorten_service,
        resolve_service,
        mapping_store,
        rate_limiter,
        create_quota: quota,
        rate_limit_fail_open,
    };

    (state, store)
}

/// Seeds a live mapping with a one-week lifetime.
pub async fn create_test_mapping(store: &MemoryMappingStore, id: &str, url: &str) {
    let now = Utc::now();
    let mapping = Mapping::new(
        id.to_string(),
        url.to_string(),
        now,
        now + chrono::Duration::days(7),
    );
    store.insert(mapping).await.unwrap();
}

/// Seeds a mapping whose lifetime already ran out.
pub async fn create_expired_mapping(store: &MemoryMappingStore, id: &str, url: &str) {
    let created = Utc::now() - chrono::Duration::days(8);
    let mapping = Mapping::new(
        id.to_string(),
        url.to_string(),
        created,
        created + chrono::Duration::days(7),
    );
    store.insert(mapping).await.unwrap();
}
