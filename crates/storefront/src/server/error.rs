//! Failure type for route handlers and the terminal error responder.
//!
//! Handlers return [`AppError`]; its `IntoResponse` impl only sets the status
//! and attaches an [`ErrorReport`]. [`render_errors`] is the single place
//! that turns a report into the `error` view, so every failure (routing
//! miss, handler error, panic, timeout) is rendered the same way.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use super::{context::RequestContext, state::AppState, view::View};
use crate::session::SessionError;

/// Errors a route handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// No route group matched the request, or the addressed entity is absent.
    #[error("Not Found")]
    NotFound,

    /// The request was malformed.
    #[error("{0}")]
    BadRequest(String),

    /// The handler did not finish within the request timeout.
    #[error("Request Timeout")]
    Timeout,

    /// Anything else; carries no status of its own.
    #[error("{0}")]
    Internal(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl AppError {
    /// Status attached to the failure, if any. The responder falls back to
    /// `500` when this is `None`.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            AppError::Timeout => Some(StatusCode::REQUEST_TIMEOUT),
            AppError::Internal(_) => None,
        }
    }

    fn report(&self) -> ErrorReport {
        ErrorReport {
            message: self.to_string(),
            detail: format!("{self:?}"),
        }
    }
}

/// What the error responder needs to know about a failure.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    /// User-facing message.
    pub message: String,
    /// Full error detail, only shown in development.
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = status.into_response();
        response.extensions_mut().insert(self.report());
        response
    }
}

/// Render any response carrying an [`ErrorReport`] as the `error` view.
///
/// Runs outside context enrichment and reads the request context from the
/// response extensions. A bare `408` from the timeout layer is treated as
/// [`AppError::Timeout`].
pub async fn render_errors(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();

    let report = match response.extensions().get::<ErrorReport>() {
        Some(report) => report.clone(),
        None if status == StatusCode::REQUEST_TIMEOUT => AppError::Timeout.report(),
        None => return response,
    };
    let context = response.extensions().get::<Arc<RequestContext>>().cloned();

    if status.is_server_error() {
        error!(status = status.as_u16(), message = %report.message, "request failed");
    } else {
        debug!(status = status.as_u16(), message = %report.message, "request rejected");
    }

    let detail = if state.app_env.is_development() {
        json!({ "status": status.as_u16(), "detail": report.detail })
    } else {
        json!({})
    };

    let view = match context.as_deref() {
        Some(ctx) => View::new("error", ctx),
        None => View::bare("error"),
    };
    let view = view.with("message", &report.message).with("error", detail);
    (status, view).into_response()
}

/// Convert a handler panic into an internal failure.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "handler panicked".to_owned()
    };
    AppError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::NotFound.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(
            AppError::Timeout.status(),
            Some(StatusCode::REQUEST_TIMEOUT)
        );
        assert_eq!(AppError::Internal("x".into()).status(), None);
    }

    #[test]
    fn into_response_attaches_report() {
        let resp = AppError::Internal("database exploded".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let report = resp.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.message, "database exploded");
        assert!(report.detail.contains("Internal"));
    }

    #[test]
    fn not_found_message() {
        let resp = AppError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.extensions().get::<ErrorReport>().unwrap().message, "Not Found");
    }

    #[test]
    fn panic_payloads_become_internal_errors() {
        let resp = panic_response(Box::new("static message"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.extensions().get::<ErrorReport>().unwrap().message,
            "static message"
        );

        let resp = panic_response(Box::new(String::from("owned message")));
        assert_eq!(
            resp.extensions().get::<ErrorReport>().unwrap().message,
            "owned message"
        );

        let resp = panic_response(Box::new(42_u8));
        assert_eq!(
            resp.extensions().get::<ErrorReport>().unwrap().message,
            "handler panicked"
        );
    }
}
