//! Configuration loading and validation for the storefront service.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if a variable is present but invalid.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Deployment mode. Only `development` exposes error details to views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    pub fn is_development(self) -> bool {
        self == AppEnv::Development
    }
}

/// Validated storefront configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Secret used to sign session cookies. Not validated; an empty secret
    /// only produces a startup warning.
    #[serde(default)]
    pub session_secret: String,

    /// Deployment mode (`development` or `production`).
    #[serde(default)]
    pub app_env: AppEnv,

    /// Directory served as static files ahead of the application routes.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Optional JSON file seeding the category directory.
    #[serde(default)]
    pub categories_path: Option<String>,

    /// Lifetime of a saved session and of its cookie.
    #[serde(default = "default_session_max_age")]
    pub session_max_age_secs: u64,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// OTLP collector endpoint. Span export is disabled when unset.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,
}

fn default_port() -> u16 {
    3000
}
fn default_public_dir() -> String {
    "public".into()
}
fn default_session_max_age() -> u64 {
    // Three hours.
    3 * 60 * 60
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    pub fn session_max_age(&self) -> Duration {
        Duration::from_secs(self.session_max_age_secs)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.session_max_age_secs == 0 {
            anyhow::bail!("SESSION_MAX_AGE_SECS must be > 0");
        }
        if self.public_dir.trim().is_empty() {
            anyhow::bail!("PUBLIC_DIR must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Config {
        Config {
            port: default_port(),
            session_secret: "keyboard cat".into(),
            app_env: AppEnv::default(),
            public_dir: default_public_dir(),
            categories_path: None,
            session_max_age_secs: default_session_max_age(),
            log_level: default_log_level(),
            otel_exporter_otlp_endpoint: None,
        }
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_port(), 3000);
        assert_eq!(default_public_dir(), "public");
        assert_eq!(default_session_max_age(), 10_800);
        assert_eq!(default_log_level(), "info");
        assert_eq!(AppEnv::default(), AppEnv::Development);
    }

    #[test]
    fn validate_accepts_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn validate_accepts_empty_session_secret() {
        let cfg = Config {
            session_secret: String::new(),
            ..valid()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_max_age() {
        let cfg = Config {
            session_max_age_secs: 0,
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_public_dir() {
        let cfg = Config {
            public_dir: "  ".into(),
            ..valid()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn app_env_parses_lowercase() {
        let env: AppEnv = serde_json::from_str(r#""production""#).unwrap();
        assert_eq!(env, AppEnv::Production);
        assert!(!env.is_development());
        assert!(AppEnv::Development.is_development());
    }

    #[test]
    fn max_age_follows_seconds() {
        let cfg = valid();
        assert_eq!(cfg.session_max_age(), Duration::from_secs(10_800));
    }
}
