//! Common error types shared across crates.

use thiserror::Error;

/// Failure reported by a storage collaborator (category directory, seed loader).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store cannot be reached or has not been initialised.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but the query failed.
    #[error("query failed: {0}")]
    Query(String),
}
