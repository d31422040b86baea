//! Cookie-backed sessions and the identity they carry.
//!
//! Session storage, expiry, and the signed `sid` cookie are handled by
//! `tower-sessions`; [`SessionSettings::layer`] configures it. [`Session`]
//! layers the storefront's vocabulary on top: the logged-in user, flash
//! messages, and the free-form values exposed to views.
//!
//! - Nothing is stored and no cookie is set until a handler modifies the
//!   session.
//! - Logging in rotates the session id.

pub mod handle;

pub use handle::{Session, SessionSnapshot};

use std::time::Duration;

use sha2::{Digest, Sha512};
use thiserror::Error;
use tower_sessions::{
    cookie::{time, Key, SameSite},
    service::SignedCookie,
    Expiry, MemoryStore, SessionManagerLayer,
};

/// Name of the cookie carrying the signed session id.
pub const SESSION_COOKIE_NAME: &str = "sid";

/// Errors produced by the session layer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing session store failed to load or save the record.
    #[error("session store failure: {0}")]
    Store(#[from] tower_sessions::session::Error),
}

/// Session store plus the cookie parameters every request shares.
#[derive(Clone)]
pub struct SessionSettings {
    store: MemoryStore,
    key: Key,
    max_age: Duration,
}

impl SessionSettings {
    /// Sign cookies with a key derived from `secret`; sessions expire after
    /// `max_age` without modification.
    pub fn new(secret: &str, max_age: Duration) -> Self {
        // Key requires 64 bytes of material, exactly one SHA-512 digest.
        let digest = Sha512::digest(secret.as_bytes());
        Self {
            store: MemoryStore::default(),
            key: Key::from(digest.as_slice()),
            max_age,
        }
    }

    /// The `tower-sessions` layer for the application routes.
    pub fn layer(&self) -> SessionManagerLayer<MemoryStore, SignedCookie> {
        let max_age = i64::try_from(self.max_age.as_secs()).unwrap_or(i64::MAX);
        SessionManagerLayer::new(self.store.clone())
            .with_name(SESSION_COOKIE_NAME)
            .with_http_only(true)
            .with_secure(false)
            .with_same_site(SameSite::Lax)
            .with_expiry(Expiry::OnInactivity(time::Duration::seconds(max_age)))
            .with_signed(self.key.clone())
    }
}

impl std::fmt::Debug for SessionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSettings")
            .field("key", &"[REDACTED]")
            .field("max_age", &self.max_age)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let settings = SessionSettings::new("keyboard cat", Duration::from_secs(60));
        let debug = format!("{settings:?}");
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("keyboard cat"));
    }

    #[test]
    fn empty_secret_still_yields_a_key() {
        let settings = SessionSettings::new("", Duration::from_secs(60));
        assert_eq!(settings.key.master().len(), 64);
    }

    #[test]
    fn same_secret_derives_same_key() {
        let a = SessionSettings::new("s3cret", Duration::from_secs(60));
        let b = SessionSettings::new("s3cret", Duration::from_secs(60));
        let c = SessionSettings::new("other", Duration::from_secs(60));
        assert_eq!(a.key.master(), b.key.master());
        assert_ne!(a.key.master(), c.key.master());
    }
}
