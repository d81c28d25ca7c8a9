//! DTOs for the shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// The URL is checked by the creation flow itself, not here: the
/// verification gate runs first and must see unvalidated requests too.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten (must be absolute HTTP/HTTPS).
    pub url: String,

    /// Proof-of-humanity token; required when verification is enabled.
    pub token: Option<String>,
}

/// Response describing the created mapping.
///
/// Timestamps are RFC 3339 in UTC. `expiredAt` keeps its historical wire
/// name; clients depend on it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expired_at: DateTime<Utc>,
    /// Full public short URL for the identifier.
    pub url: String,
}
