//! Axum router construction.
//!
//! Layer order, outermost first: tracing, compression, static files, session
//! resolution, error responder, context enrichment, timeout, panic catcher,
//! route groups.

use axum::{middleware::from_fn_with_state, Router};
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, services::ServeDir,
    timeout::TimeoutLayer, trace::TraceLayer,
};

use super::{error, handlers, middleware, routes, state::AppState};

/// Ordered `(prefix, group)` pairs. `/` is merged at the root; every other
/// group is nested under its prefix.
pub type RouteTable = Vec<(&'static str, Router<AppState>)>;

/// The storefront's route groups.
pub fn route_groups() -> RouteTable {
    vec![
        ("/", routes::index::routes()),
        ("/products", routes::products::routes()),
        ("/user", routes::user::routes()),
        ("/pages", routes::pages::routes()),
    ]
}

/// Build the application [`Router`] with all routes and middleware attached.
pub fn build(state: AppState) -> Router {
    assemble(state, route_groups())
}

/// Build the full middleware stack around an arbitrary route table.
pub fn assemble(state: AppState, groups: RouteTable) -> Router {
    let dispatcher = groups
        .into_iter()
        .fold(Router::new(), |router, (prefix, group)| {
            if prefix == "/" {
                router.merge(group)
            } else {
                router.nest(prefix, group)
            }
        });

    // A known path with an unrouted method is a miss like any other.
    let app = dispatcher
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .layer(from_fn_with_state(state.clone(), middleware::enrich_context))
        .layer(from_fn_with_state(state.clone(), error::render_errors))
        .layer(state.sessions.layer())
        .with_state(state.clone());

    let assets = ServeDir::new(state.public_dir.as_ref())
        .append_index_html_on_directories(false)
        .call_fallback_on_method_not_allowed(true)
        .fallback(app);

    Router::new()
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
