//! Axum middleware stages applied to the application routes.
//!
//! `tower-sessions` resolves the session first, then the error responder and
//! context enrichment run. Request tracing and response compression wrap the
//! whole router; the request timeout sits inside the error responder.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{
    context::{self, Decision},
    error::AppError,
    state::AppState,
};
use crate::session::Session;

/// Default per-request timeout applied to all routes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the [`context::RequestContext`] and pass it on, or short-circuit.
///
/// The context is attached to the request for handlers and to the response
/// for the error responder.
pub async fn enrich_context(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(session) = req.extensions().get::<tower_sessions::Session>().cloned() else {
        return AppError::Internal("session layer is not installed".into()).into_response();
    };
    let session = Session::from(session);
    let path = req.uri().path().to_owned();

    match context::enrich(&session, state.categories.as_ref(), &path).await {
        Decision::Continue(ctx) => {
            let ctx = Arc::new(ctx);
            req.extensions_mut().insert(ctx.clone());
            let mut response = next.run(req).await;
            response.extensions_mut().insert(ctx);
            response
        }
        Decision::ShortCircuit(response) => response,
    }
}
