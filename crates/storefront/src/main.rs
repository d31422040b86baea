//! `storefront` — server-rendered e-commerce storefront entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise the telemetry pipeline (JSON logs, optional OTLP export).
//! 3. Seed the [`InMemoryCategoryDirectory`].
//! 4. Configure the [`SessionSettings`] for the session layer.
//! 5. Build the Axum router and serve until Ctrl-C / SIGTERM.

mod catalog;
mod config;
mod server;
mod session;
mod telemetry;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use catalog::InMemoryCategoryDirectory;
use config::Config;
use server::state::AppState;
use session::SessionSettings;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(cfg.otel_exporter_otlp_endpoint.as_deref(), &cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        app_env = ?cfg.app_env,
        "storefront starting"
    );
    if cfg.session_secret.trim().is_empty() {
        warn!("SESSION_SECRET is empty; session cookies are signed with an empty key");
    }

    // -----------------------------------------------------------------------
    // 3. Category directory
    // -----------------------------------------------------------------------
    let seed = match &cfg.categories_path {
        Some(path) => catalog::load_seed(Path::new(path))?,
        None => Vec::new(),
    };
    let directory = InMemoryCategoryDirectory::with_categories(seed);
    info!(categories = directory.len(), "category directory ready");

    // -----------------------------------------------------------------------
    // 4. Sessions
    // -----------------------------------------------------------------------
    let sessions = SessionSettings::new(&cfg.session_secret, cfg.session_max_age());

    // -----------------------------------------------------------------------
    // 5. HTTP server
    // -----------------------------------------------------------------------
    let state = AppState::new(
        sessions,
        Arc::new(directory),
        cfg.app_env,
        PathBuf::from(&cfg.public_dir),
    );
    let router = server::router::build(state);

    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "server is running");

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    telemetry::shutdown();
    Ok(())
}
