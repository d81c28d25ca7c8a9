//! Repository trait for short URL mapping data access.

use crate::domain::entities::Mapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing and resolving mappings.
///
/// Implementations must treat expired records as absent: an expired identifier
/// can be looked up without being found and can be claimed by a fresh insert.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisMappingStore`] - Redis implementation
/// - [`crate::infrastructure::persistence::MemoryMappingStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Stores a mapping if and only if its identifier is not already taken
    /// by a live record. The check and the write are a single atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a live record already holds the
    /// identifier. Returns [`AppError::Internal`] when the backend is
    /// unreachable.
    async fn insert(&self, mapping: Mapping) -> Result<(), AppError>;

    /// Looks up a mapping by identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` for a live record
    /// - `Ok(None)` for an unknown or expired identifier
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the backend is unreachable.
    async fn find(&self, id: &str) -> Result<Option<Mapping>, AppError>;

    /// Probes whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}
