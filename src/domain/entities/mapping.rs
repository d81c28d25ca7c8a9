//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mapping between a short identifier and its target URL.
///
/// The target URL is stored exactly as submitted; redirects reproduce it byte
/// for byte. A mapping past `expires_at` is indistinguishable from one that
/// never existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(
        id: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the mapping has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Time left until expiry, or `None` for an already expired mapping.
    pub fn remaining_lifetime(&self) -> Option<chrono::Duration> {
        let remaining = self.expires_at - Utc::now();
        (remaining > chrono::Duration::zero()).then_some(remaining)
    }
}
