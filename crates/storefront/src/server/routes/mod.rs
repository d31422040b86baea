//! Route groups, each mounted under a fixed prefix by the router.
//!
//! Every handler receives the request context built by the enrichment stage
//! as `Extension<Arc<RequestContext>>`.

pub mod index;
pub mod pages;
pub mod products;
pub mod user;
