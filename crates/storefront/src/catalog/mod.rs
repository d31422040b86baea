//! Category directory: the navigation menu's source of product categories.
//!
//! The storefront only ever asks for the full list ordered by title, once per
//! request. [`InMemoryCategoryDirectory`] serves it from memory and can be
//! seeded from a JSON file at startup; other backends plug in through
//! [`CategoryDirectory`].

pub mod memory;

pub use memory::InMemoryCategoryDirectory;

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use common::{Category, StoreError};

/// Read access to the product categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryDirectory: Send + Sync {
    /// Every category, sorted by title ascending.
    async fn find_all_sorted(&self) -> Result<Vec<Category>, StoreError>;
}

/// Load a JSON array of categories from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid category list.
pub fn load_seed(path: &Path) -> Result<Vec<Category>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read category seed {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse category seed {}", path.display()))
}
