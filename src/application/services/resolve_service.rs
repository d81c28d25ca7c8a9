//! Mapping resolution service.

use std::sync::Arc;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::id_generator;

/// Service for resolving short identifiers back to their mappings.
///
/// Resolution is a pure read: no counters, no touch timestamps, no writes of
/// any kind. Expired and never-issued identifiers are indistinguishable to
/// callers.
pub struct ResolveService {
    store: Arc<dyn MappingRepository>,
}

impl ResolveService {
    /// Creates a new resolve service.
    pub fn new(store: Arc<dyn MappingRepository>) -> Self {
        Self { store }
    }

    /// Resolves an identifier to its live mapping.
    ///
    /// Candidates that don't even have the identifier shape are rejected
    /// without a storage round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed, unknown, and expired
    /// identifiers alike. Returns [`AppError::Internal`] when the store is
    /// unreachable.
    pub async fn resolve(&self, id: &str) -> Result<Mapping, AppError> {
        if !id_generator::matches_format(id) {
            return Err(AppError::not_found("Short link not found"));
        }

        self.store
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }
}
