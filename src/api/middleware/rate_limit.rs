//! Sliding window rate limiting middleware.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{error, warn};

use crate::error::{AppError, X_RATE_LIMIT_LIMIT, X_RATE_LIMIT_REMAINING};
use crate::state::AppState;
use crate::utils::client_ip::client_identity;

/// Admission control for the creation endpoint.
///
/// # Flow
///
/// 1. Extract the client identity from `X-Forwarded-For`
/// 2. Ask the rate limiter for one admission under the creation quota
/// 3. Denied requests receive `429 Too Many Requests` and never reach the
///    handler
///
/// Every decision, allowed or denied, is reported back to the client through
/// `x-ratelimit-limit` and `x-ratelimit-remaining` headers.
///
/// # Backend Failures
///
/// When the limiter backend cannot be consulted the configured policy
/// applies: fail-open admits the request without quota headers, fail-closed
/// refuses it with a 500. Fail-closed is the default; a limiter outage must
/// not silently lift the lid on creation traffic.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::rate_limit;
///
/// let create_routes = Router::new()
///     .route("/api/short", post(create_short_url_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit::creation_guard));
/// ```
pub async fn creation_guard(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = client_identity(req.headers());

    match state.rate_limiter.admit(&identity, state.create_quota).await {
        Ok(admission) if admission.is_allowed() => {
            let mut response = next.run(req).await;
            stamp_quota_headers(&mut response, admission.limit(), admission.remaining());
            Ok(response)
        }
        Ok(admission) => {
            warn!("Rate limit exceeded for {}", identity);
            Err(AppError::RateLimited {
                limit: admission.limit(),
                remaining: admission.remaining(),
            })
        }
        Err(e) if state.rate_limit_fail_open => {
            warn!("Rate limiter unavailable, admitting {}: {}", identity, e);
            Ok(next.run(req).await)
        }
        Err(e) => {
            error!("Rate limiter unavailable, refusing {}: {}", identity, e);
            Err(AppError::internal("Rate limiter unavailable"))
        }
    }
}

/// Reports the post-decision budget on a successful response.
fn stamp_quota_headers(response: &mut Response, limit: u32, remaining: u32) {
    let headers = response.headers_mut();
    headers.insert(X_RATE_LIMIT_LIMIT, HeaderValue::from(limit));
    headers.insert(X_RATE_LIMIT_REMAINING, HeaderValue::from(remaining));
}
