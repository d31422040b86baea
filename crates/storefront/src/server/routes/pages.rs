//! Static informational pages.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::server::{context::RequestContext, state::AppState, view::View};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/about-us", get(about_us))
        .route("/shipping-policy", get(shipping_policy))
        .route("/careers", get(careers))
}

async fn about_us(Extension(ctx): Extension<Arc<RequestContext>>) -> View {
    View::new("pages/about-us", &ctx).with("pageName", "About Us")
}

async fn shipping_policy(Extension(ctx): Extension<Arc<RequestContext>>) -> View {
    View::new("pages/shipping-policy", &ctx).with("pageName", "Shipping Policy")
}

async fn careers(Extension(ctx): Extension<Arc<RequestContext>>) -> View {
    View::new("pages/careers", &ctx).with("pageName", "Careers")
}
