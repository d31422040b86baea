//! Shared application state injected into every Axum handler and middleware.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{CategoryDirectory, InMemoryCategoryDirectory};
use crate::config::AppEnv;
use crate::session::SessionSettings;

/// Application state shared across all requests.
///
/// All fields are cheaply cloneable so that Axum can clone the state for each
/// request without copying the stores behind them.
#[derive(Clone)]
pub struct AppState {
    /// Session store and cookie parameters.
    pub sessions: SessionSettings,
    /// Source of the navigation categories.
    pub categories: Arc<dyn CategoryDirectory>,
    /// Deployment mode; decides whether error details reach the views.
    pub app_env: AppEnv,
    /// Directory served as static files.
    pub public_dir: Arc<Path>,
}

impl AppState {
    pub fn new(
        sessions: SessionSettings,
        categories: Arc<dyn CategoryDirectory>,
        app_env: AppEnv,
        public_dir: PathBuf,
    ) -> Self {
        Self {
            sessions,
            categories,
            app_env,
            public_dir: Arc::from(public_dir),
        }
    }

    /// Replace the category directory, keeping everything else.
    #[cfg(test)]
    pub fn with_categories(self, categories: Arc<dyn CategoryDirectory>) -> Self {
        Self { categories, ..self }
    }
}

impl Default for AppState {
    /// Creates a development-mode state with empty stores, suitable for tests.
    fn default() -> Self {
        Self::new(
            SessionSettings::new("test-secret", Duration::from_secs(3600)),
            Arc::new(InMemoryCategoryDirectory::new()),
            AppEnv::Development,
            PathBuf::from("public"),
        )
    }
}
