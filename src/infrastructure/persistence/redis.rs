//! Redis-backed mapping store.

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, ExistenceCheck, SetExpiry, SetOptions};
use tracing::{debug, error};

/// Mapping store backed by Redis string keys.
///
/// Records are stored as JSON under a namespaced key with a TTL equal to the
/// record's remaining lifetime, so Redis evicts expired mappings on its own.
/// Insert-if-absent atomicity comes from `SET NX`.
pub struct RedisMappingStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisMappingStore {
    /// Wraps an established connection manager.
    ///
    /// The caller owns connection setup (and its retry policy); every store
    /// operation multiplexes over clones of the shared manager.
    pub fn new(conn: ConnectionManager) -> Self {
        Self {
            conn,
            key_prefix: "short:".to_string(),
        }
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, id: &str) -> String {
        format!("{}{}", self.key_prefix, id)
    }
}

#[async_trait]
impl MappingRepository for RedisMappingStore {
    async fn insert(&self, mapping: Mapping) -> Result<(), AppError> {
        // An already expired record equals an absent one; writing it would
        // only create a key Redis immediately has to evict.
        let Some(lifetime) = mapping.remaining_lifetime() else {
            return Ok(());
        };

        let key = self.build_key(&mapping.id);
        let payload = serde_json::to_string(&mapping)
            .map_err(|e| AppError::internal(format!("Failed to encode mapping: {}", e)))?;

        let options = SetOptions::default()
            .conditional_set(ExistenceCheck::NX)
            .with_expiration(SetExpiry::PX(lifetime.num_milliseconds().max(1) as u64));

        let mut conn = self.conn.clone();
        let stored: bool = conn.set_options(&key, payload, options).await.map_err(|e| {
            error!("Redis SET error for {}: {}", mapping.id, e);
            AppError::internal("Storage unavailable")
        })?;

        if stored {
            debug!("Stored mapping {} -> {}", mapping.id, mapping.original_url);
            Ok(())
        } else {
            Err(AppError::conflict(format!(
                "Identifier '{}' already exists",
                mapping.id
            )))
        }
    }

    async fn find(&self, id: &str) -> Result<Option<Mapping>, AppError> {
        let key = self.build_key(id);
        let mut conn = self.conn.clone();

        let raw: Option<String> = conn.get(&key).await.map_err(|e| {
            error!("Redis GET error for {}: {}", id, e);
            AppError::internal("Storage unavailable")
        })?;

        let Some(raw) = raw else {
            debug!("Mapping MISS: {}", id);
            return Ok(None);
        };

        let mapping: Mapping = serde_json::from_str(&raw).map_err(|e| {
            error!("Corrupt mapping record for {}: {}", id, e);
            AppError::internal("Corrupt mapping record")
        })?;

        // TTL rounding can leave a key alive a moment past its expiry.
        if mapping.is_expired() {
            return Ok(None);
        }

        debug!("Mapping HIT: {} -> {}", id, mapping.original_url);
        Ok(Some(mapping))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
