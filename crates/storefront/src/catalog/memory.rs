//! In-memory category directory.
//!
//! Uses `arc-swap` so request-path reads never block while a reload swaps in
//! a new list.

use std::sync::Arc;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use common::{Category, StoreError};

use super::CategoryDirectory;

/// Category list held in memory, kept sorted by title.
#[derive(Clone, Debug)]
pub struct InMemoryCategoryDirectory {
    inner: Arc<ArcSwap<Vec<Category>>>,
}

impl InMemoryCategoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(Vec::new())),
        }
    }

    /// Create a directory holding `categories`.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        let directory = Self::new();
        directory.replace_all(categories);
        directory
    }

    /// Number of categories currently held.
    pub fn len(&self) -> usize {
        self.inner.load().len()
    }

    /// Atomically replace the whole list.
    pub fn replace_all(&self, mut categories: Vec<Category>) {
        categories.sort_by(|a, b| a.title.cmp(&b.title));
        self.inner.store(Arc::new(categories));
    }
}

impl Default for InMemoryCategoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryDirectory for InMemoryCategoryDirectory {
    async fn find_all_sorted(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.inner.load().as_ref().clone())
    }
}
