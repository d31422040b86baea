//! Common domain types, breadcrumb derivation, and errors shared across storefront crates.

pub mod breadcrumb;
pub mod error;
pub mod models;

pub use breadcrumb::{derive_breadcrumbs, Breadcrumb};
pub use error::StoreError;
pub use models::{Category, User};
