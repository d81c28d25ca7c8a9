//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/short`   - Create a short URL (rate limited)
//! - `GET  /{id}`        - Short link redirect (public)
//! - `GET  /health`      - Health check: storage, rate limiter (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-identity sliding window on the creation route
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{create_short_url_handler, health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the core router with all routes and per-route middleware.
///
/// Only the creation route sits behind admission control: redirects are the
/// hot path and stay unthrottled, and the health probe must answer even for
/// a client that just exhausted its quota.
pub fn router(state: AppState) -> Router {
    let create_routes = Router::new()
        .route("/api/short", post(create_short_url_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::creation_guard,
        ));

    Router::new()
        .route("/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(create_routes)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps the core router with path normalization for serving.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
