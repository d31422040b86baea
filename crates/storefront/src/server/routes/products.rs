//! Product listing, overall and per category.

use std::sync::Arc;

use axum::{extract::Path, routing::get, Extension, Router};

use crate::server::{context::RequestContext, error::AppError, state::AppState, view::View};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(all_products))
        .route("/:slug", get(by_category))
}

/// `GET /products`
async fn all_products(Extension(ctx): Extension<Arc<RequestContext>>) -> View {
    View::new("shop/index", &ctx).with("pageName", "All Products")
}

/// `GET /products/:slug` — 404 when no category has that slug.
async fn by_category(
    Extension(ctx): Extension<Arc<RequestContext>>,
    Path(slug): Path<String>,
) -> Result<View, AppError> {
    let category = ctx
        .categories
        .iter()
        .find(|c| c.slug == slug)
        .ok_or(AppError::NotFound)?;
    Ok(View::new("shop/index", &ctx)
        .with("pageName", &category.title)
        .with("category", category))
}
