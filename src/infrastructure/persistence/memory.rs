//! In-process mapping store.

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

/// Mapping store held entirely in process memory.
///
/// The development and test backend, also the fallback when no Redis URL is
/// configured. Contents are lost on restart.
///
/// Insert-if-absent atomicity comes from the `DashMap` entry API: the shard
/// lock is held across the occupancy check and the write.
#[derive(Default)]
pub struct MemoryMappingStore {
    records: DashMap<String, Mapping>,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops expired records to reclaim memory.
    ///
    /// Purely an optimization: lookups already treat expired records as
    /// absent, so correctness never depends on this running.
    pub fn purge_expired(&self) {
        let before = self.records.len();
        self.records.retain(|_, mapping| !mapping.is_expired());
        let removed = before - self.records.len();
        if removed > 0 {
            debug!("Purged {} expired mappings", removed);
        }
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingStore {
    async fn insert(&self, mapping: Mapping) -> Result<(), AppError> {
        match self.records.entry(mapping.id.clone()) {
            Entry::Occupied(mut slot) => {
                // An expired record no longer owns its identifier.
                if slot.get().is_expired() {
                    slot.insert(mapping);
                    Ok(())
                } else {
                    Err(AppError::conflict(format!(
                        "Identifier '{}' already exists",
                        mapping.id
                    )))
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(mapping);
                Ok(())
            }
        }
    }

    async fn find(&self, id: &str) -> Result<Option<Mapping>, AppError> {
        let Some(record) = self.records.get(id) else {
            return Ok(None);
        };

        if record.is_expired() {
            drop(record);
            // Re-check under the entry lock so a concurrent reinsert
            // of the same identifier is never removed.
            self.records.remove_if(id, |_, mapping| mapping.is_expired());
            return Ok(None);
        }

        Ok(Some(record.value().clone()))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
