//! Handler for the shortening endpoint.

use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::short::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted target.
///
/// # Endpoint
///
/// `POST /api/short`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "token": "proof-of-humanity"   // required when verification is enabled
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored mapping:
///
/// ```json
/// {
///   "id": "Ab3xY9kLm2Qr",
///   "originalUrl": "https://example.com/some/long/path",
///   "createdAt": "2026-02-01T12:00:00Z",
///   "expiredAt": "2026-02-08T12:00:00Z",
///   "url": "https://sho.rt/Ab3xY9kLm2Qr"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or invalid URL, 401
/// Unauthorized when verification fails, and 500 when storage misbehaves.
/// Admission control runs as route middleware before this handler is
/// reached.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    // Body rejections get the same wire shape as every other error.
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    let mapping = state
        .shorten_service
        .create_mapping(&payload.url, payload.token.as_deref())
        .await?;

    let url = state.shorten_service.public_url(&mapping.id);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: mapping.id,
            original_url: mapping.original_url,
            created_at: mapping.created_at,
            expired_at: mapping.expires_at,
            url,
        }),
    ))
}
