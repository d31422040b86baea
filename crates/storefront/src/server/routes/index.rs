//! Home page.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::server::{context::RequestContext, state::AppState, view::View};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// `GET /`
async fn home(Extension(ctx): Extension<Arc<RequestContext>>) -> View {
    View::new("home", &ctx).with("pageName", "Home")
}
