//! Handlers shared by the whole router.

use super::error::AppError;

/// Catch-all for requests no route group claimed.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
