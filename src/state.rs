use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};
use crate::domain::rate_limit::{RateLimitQuota, RateLimiter};
use crate::domain::repositories::MappingRepository;

/// Shared application state injected into handlers and middleware.
///
/// Everything heavy sits behind an `Arc`, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub resolve_service: Arc<ResolveService>,
    /// Held directly (not only inside services) for the health check.
    pub mapping_store: Arc<dyn MappingRepository>,
    pub rate_limiter: Arc<dyn RateLimiter>,
    /// Quota applied by the creation middleware.
    pub create_quota: RateLimitQuota,
    /// Policy when the limiter backend cannot be consulted.
    pub rate_limit_fail_open: bool,
}
