//! [`Session`]: the storefront's view of one shopper's session.

use std::collections::BTreeMap;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use common::User;
use serde_json::{Map, Value};

use super::SessionError;
use crate::server::error::AppError;

/// Arbitrary per-session values as exposed to views.
pub type SessionSnapshot = Map<String, Value>;

/// Session key holding the logged-in [`User`].
pub const USER_KEY: &str = "user";
/// Session key holding pending flash messages, keyed by kind.
pub const FLASH_KEY: &str = "flash";
/// Session key holding the free-form values handed to views.
pub const VALUES_KEY: &str = "values";

type FlashMessages = BTreeMap<String, Vec<String>>;

/// Cloneable handle onto the current request's session.
#[derive(Debug, Clone)]
pub struct Session(tower_sessions::Session);

impl From<tower_sessions::Session> for Session {
    fn from(inner: tower_sessions::Session) -> Self {
        Self(inner)
    }
}

impl Session {
    /// `true` once a user has logged in on this session.
    pub async fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self.current_user().await?.is_some())
    }

    /// The logged-in user, if any.
    pub async fn current_user(&self) -> Result<Option<User>, SessionError> {
        Ok(self.0.get::<User>(USER_KEY).await?)
    }

    /// Copy of the free-form values, for the view layer.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        Ok(self
            .0
            .get::<SessionSnapshot>(VALUES_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Attach `user`, issuing a new session id first.
    pub async fn log_in(&self, user: User) -> Result<(), SessionError> {
        self.0.cycle_id().await?;
        self.0.insert(USER_KEY, user).await?;
        Ok(())
    }

    /// Detach the current user.
    pub async fn log_out(&self) -> Result<(), SessionError> {
        self.0.remove::<User>(USER_KEY).await?;
        Ok(())
    }

    /// Queue a one-shot message of `kind` for a later request.
    pub async fn flash(&self, kind: &str, message: impl Into<String>) -> Result<(), SessionError> {
        let mut flash = self.flash_messages().await?;
        flash.entry(kind.to_owned()).or_default().push(message.into());
        self.0.insert(FLASH_KEY, flash).await?;
        Ok(())
    }

    /// Remove and return every pending message of `kind`.
    pub async fn take_flash(&self, kind: &str) -> Result<Vec<String>, SessionError> {
        let mut flash = self.flash_messages().await?;
        let Some(messages) = flash.remove(kind) else {
            return Ok(Vec::new());
        };
        if flash.is_empty() {
            self.0.remove::<FlashMessages>(FLASH_KEY).await?;
        } else {
            self.0.insert(FLASH_KEY, flash).await?;
        }
        Ok(messages)
    }

    async fn flash_messages(&self) -> Result<FlashMessages, SessionError> {
        Ok(self.0.get::<FlashMessages>(FLASH_KEY).await?.unwrap_or_default())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<tower_sessions::Session>()
            .cloned()
            .map(Session::from)
            .ok_or_else(|| AppError::Internal("session layer is not installed".into()))
    }
}
