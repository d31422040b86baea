//! Axum HTTP server: request pipeline, route groups, and error rendering.
//!
//! # Responsibilities
//! - Resolve sessions and build the per-request [`context::RequestContext`].
//! - Dispatch to the fixed table of route groups.
//! - Render every unhandled failure through the single error responder.

pub mod context;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod view;

use tokio::signal;
use tracing::{error, info};

/// Resolve when the process receives Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl-C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl-C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
