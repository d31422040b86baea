//! Account pages. Credential checks belong to the identity provider; this
//! group only reads and clears the identity held by the session.

use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};

use crate::server::{
    context::RequestContext,
    error::AppError,
    state::AppState,
    view::{redirect, View},
};
use crate::session::Session;

pub const SIGN_IN_REQUIRED: &str = "You must be signed in to view this page";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signin", get(sign_in))
        .route("/profile", get(profile))
        .route("/logout", get(log_out))
}

/// `GET /user/signin` — shows and clears pending error messages.
async fn sign_in(
    Extension(ctx): Extension<Arc<RequestContext>>,
    session: Session,
) -> Result<View, AppError> {
    Ok(View::new("user/signin", &ctx)
        .with("pageName", "Sign In")
        .with("errorMsg", session.take_flash("error").await?))
}

/// `GET /user/profile` — signed-in users only.
async fn profile(
    Extension(ctx): Extension<Arc<RequestContext>>,
    session: Session,
) -> Result<Response, AppError> {
    if !ctx.login {
        session.flash("error", SIGN_IN_REQUIRED).await?;
        return Ok(redirect("/user/signin"));
    }
    Ok(View::new("user/profile", &ctx)
        .with("pageName", "User Profile")
        .into_response())
}

/// `GET /user/logout`
async fn log_out(session: Session) -> Result<Response, AppError> {
    session.log_out().await?;
    Ok(redirect("/"))
}
