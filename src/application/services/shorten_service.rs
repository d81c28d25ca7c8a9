//! Mapping creation service.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingRepository;
use crate::domain::verification::HumanVerifier;
use crate::error::AppError;
use crate::utils::id_generator;
use crate::utils::url_validator::validate_target_url;

/// Collision retry budget for identifier allocation.
///
/// At realistic scale a single collision is already unlikely; ten in a row
/// means the keyspace is effectively exhausted or the backend is lying, and
/// the request fails rather than looping forever.
const MAX_INSERT_ATTEMPTS: usize = 10;

/// Settings for the creation flow.
#[derive(Debug, Clone)]
pub struct ShortenOptions {
    /// Public origin used to assemble short URLs. Deliberately configured
    /// rather than derived from the Host header, which the client controls.
    pub base_url: String,
    /// Lifetime granted to every new mapping.
    pub retention: chrono::Duration,
    /// When `true`, requests must carry a token the verifier accepts.
    pub require_verification: bool,
}

impl Default for ShortenOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            retention: chrono::Duration::days(7),
            require_verification: false,
        }
    }
}

/// Service for creating short URL mappings.
///
/// Runs the creation gates in order: human verification, target URL
/// validation, then identifier allocation against the store. A request that
/// fails an early gate never reaches the later ones.
pub struct ShortenService {
    store: Arc<dyn MappingRepository>,
    verifier: Arc<dyn HumanVerifier>,
    options: ShortenOptions,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(
        store: Arc<dyn MappingRepository>,
        verifier: Arc<dyn HumanVerifier>,
        options: ShortenOptions,
    ) -> Self {
        Self {
            store,
            verifier,
            options,
        }
    }

    /// Creates a mapping for `original_url` and stores it.
    ///
    /// The URL is stored exactly as submitted. The returned mapping carries
    /// the identifier under which it was stored.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthorized`] when verification is required and the
    ///   token is missing, rejected, or cannot be checked
    /// - [`AppError::Validation`] for a malformed or non-HTTP(S) URL
    /// - [`AppError::Internal`] when the identifier retry budget is exhausted
    ///   or the store is unreachable
    pub async fn create_mapping(
        &self,
        original_url: &str,
        token: Option<&str>,
    ) -> Result<Mapping, AppError> {
        if self.options.require_verification {
            self.check_human(token).await?;
        }

        validate_target_url(original_url).map_err(|e| AppError::bad_request(e.to_string()))?;

        self.insert_with_fresh_id(original_url).await
    }

    /// Constructs the full public short URL for an identifier.
    pub fn public_url(&self, id: &str) -> String {
        format!("{}/{}", self.options.base_url.trim_end_matches('/'), id)
    }

    /// Enforces the human verification gate.
    ///
    /// A backend failure counts as a failed verification: an outage must not
    /// silently disable the gate.
    async fn check_human(&self, token: Option<&str>) -> Result<(), AppError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Err(AppError::unauthorized("Verification token is required"));
        };

        let passed = self.verifier.verify(token).await.map_err(|e| {
            warn!("Verification check failed to run: {}", e);
            AppError::unauthorized("Verification failed")
        })?;

        if passed {
            Ok(())
        } else {
            Err(AppError::unauthorized("Verification failed"))
        }
    }

    /// Allocates an identifier by insertion, retrying on collision.
    ///
    /// Each attempt generates a fresh identifier and hands the collision
    /// check to the store's atomic insert, so two concurrent requests can
    /// never both claim the same identifier.
    async fn insert_with_fresh_id(&self, original_url: &str) -> Result<Mapping, AppError> {
        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let created_at = Utc::now();
            let mapping = Mapping::new(
                id_generator::generate(),
                original_url.to_string(),
                created_at,
                created_at + self.options.retention,
            );

            match self.store.insert(mapping.clone()).await {
                Ok(()) => return Ok(mapping),
                Err(AppError::Conflict { .. }) => {
                    warn!(
                        "Identifier collision, retrying ({}/{})",
                        attempt, MAX_INSERT_ATTEMPTS
                    );
                }
                Err(other) => return Err(other),
            }
        }

        Err(AppError::internal("Failed to allocate a unique identifier"))
    }
}
