//! Service entrypoint.
//!
//! Loads configuration, initializes tracing, and hands off to [`linkcut::server`].

use linkcut::{config, server};

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `level` accepts anything `RUST_LOG` does, including per-target directives
/// like `linkcut=debug,tower_http=warn`.
fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
