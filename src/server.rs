//! HTTP server initialization and runtime setup.
//!
//! Handles storage backend selection, rate limiter and verifier wiring,
//! maintenance task spawning, and Axum server lifecycle.

use crate::application::services::{ResolveService, ShortenOptions, ShortenService};
use crate::config::Config;
use crate::domain::rate_limit::{RateLimitQuota, RateLimiter};
use crate::domain::repositories::MappingRepository;
use crate::domain::verification::HumanVerifier;
use crate::infrastructure::persistence::{MemoryMappingStore, RedisMappingStore};
use crate::infrastructure::rate_limit::{MemoryRateLimiter, NullRateLimiter, RedisRateLimiter};
use crate::infrastructure::verification::{NullVerifier, SharedSecretVerifier};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// How often the in-memory backend is swept for dead entries.
const MAINTENANCE_INTERVAL: Duration = Duration::from_secs(300);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (Redis, or in-memory with a maintenance sweeper)
/// - Sliding-window rate limiter (or a pass-through when disabled)
/// - Human verification gate
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Redis is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (mapping_store, limiter_backend): (Arc<dyn MappingRepository>, Arc<dyn RateLimiter>) =
        match &config.redis_url {
            Some(redis_url) => {
                let conn = connect_redis(redis_url)
                    .await
                    .context("Failed to connect to Redis")?;
                tracing::info!("Connected to Redis");
                (
                    Arc::new(RedisMappingStore::new(conn.clone())),
                    Arc::new(RedisRateLimiter::new(conn)),
                )
            }
            None => {
                tracing::warn!("Redis not configured, state will be lost on restart");
                let store = Arc::new(MemoryMappingStore::new());
                let limiter = Arc::new(MemoryRateLimiter::new());

                let window = Duration::from_secs(config.create_window_secs);
                tokio::spawn(run_maintenance(store.clone(), limiter.clone(), window));
                tracing::info!("Maintenance task started");

                (store, limiter)
            }
        };

    let rate_limiter: Arc<dyn RateLimiter> = if config.rate_limit_enabled {
        limiter_backend
    } else {
        tracing::info!("Rate limiting disabled");
        Arc::new(NullRateLimiter::new())
    };

    let verifier: Arc<dyn HumanVerifier> = if config.verification_enabled {
        let secret = config
            .verification_secret
            .as_deref()
            .context("VERIFICATION_SECRET must be set when verification is enabled")?;
        tracing::info!("Human verification enabled");
        Arc::new(SharedSecretVerifier::new(secret))
    } else {
        Arc::new(NullVerifier::new())
    };

    let shorten_service = Arc::new(ShortenService::new(
        mapping_store.clone(),
        verifier,
        ShortenOptions {
            base_url: config.base_url.clone(),
            retention: chrono::Duration::days(config.retention_days),
            require_verification: config.verification_enabled,
        },
    ));
    let resolve_service = Arc::new(ResolveService::new(mapping_store.clone()));

    let state = AppState {
        shorten_service,
        resolve_service,
        mapping_store,
        rate_limiter,
        create_quota: RateLimitQuota::new(
            config.create_limit,
            Duration::from_secs(config.create_window_secs),
        ),
        rate_limit_fail_open: config.rate_limit_fail_open,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens a managed Redis connection and verifies it with a PING.
///
/// Connection attempts are retried with jittered exponential backoff so a
/// simultaneously starting Redis container gets a chance to come up first.
async fn connect_redis(redis_url: &str) -> Result<ConnectionManager> {
    let strategy = ExponentialBackoff::from_millis(100)
        .max_delay(Duration::from_secs(10))
        .map(jitter)
        .take(5);

    let conn = Retry::spawn(strategy, || async move {
        let client = redis::Client::open(redis_url)?;
        let mut conn = ConnectionManager::new(client).await?;
        conn.ping::<()>().await?;
        Ok::<_, anyhow::Error>(conn)
    })
    .await?;

    Ok(conn)
}

/// Periodically drops expired mappings and stale limiter windows from the
/// in-memory backend. The Redis backend needs no sweeper because its keys
/// carry their own expiry.
async fn run_maintenance(
    store: Arc<MemoryMappingStore>,
    limiter: Arc<MemoryRateLimiter>,
    window: Duration,
) {
    let mut ticker = tokio::time::interval(MAINTENANCE_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        store.purge_expired();
        limiter.prune(window);
    }
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
