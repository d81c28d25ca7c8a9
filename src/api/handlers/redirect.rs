//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Behavior
///
/// Responds `302 Found` with the stored URL in the `Location` header,
/// reproduced byte for byte. 302 keeps clients re-resolving through this
/// service instead of caching the target, which matters once mappings can
/// expire.
///
/// Resolution is read-only; nothing is recorded about the visit.
///
/// # Errors
///
/// Returns 404 Not Found for malformed, unknown, and expired identifiers
/// alike.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state.resolve_service.resolve(&id).await?;

    debug!("Redirect {} -> {}", id, mapping.original_url);

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, mapping.original_url)],
    )
        .into_response())
}
