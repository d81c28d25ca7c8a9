//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Reports service health with per-component detail.
///
/// `GET /health` answers `200 OK` when both the mapping store and the rate
/// limiter backend respond, `503 Service Unavailable` otherwise. The body is
/// the same [`HealthResponse`] in both cases so probes can show which
/// component failed:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "Store reachable" },
///     "rate_limiter": { "status": "ok", "message": "Limiter reachable" }
///   }
/// }
/// ```
///
/// This route sits outside admission control: a client that exhausted its
/// creation quota still gets a health answer.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = probe_storage(&state).await;
    let rate_limiter = probe_rate_limiter(&state).await;

    let all_healthy = storage.is_ok() && rate_limiter.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage,
            rate_limiter,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn probe_storage(state: &AppState) -> CheckStatus {
    if state.mapping_store.health_check().await {
        CheckStatus::ok("Store reachable")
    } else {
        CheckStatus::error("Store unreachable")
    }
}

async fn probe_rate_limiter(state: &AppState) -> CheckStatus {
    if state.rate_limiter.health_check().await {
        CheckStatus::ok("Limiter reachable")
    } else {
        CheckStatus::error("Limiter unreachable")
    }
}
