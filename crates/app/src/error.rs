//! Unified application error type.
//!
//! The taxonomy is small and non-fatal by design: storage problems are
//! absorbed inside [`crate::storage::Store`], and cart edge cases
//! (quantity below one, removing an absent item) are defined no-ops
//! rather than errors.

use thiserror::Error;

use auramart_core::ProductId;

use crate::auth::AuthError;

/// Errors surfaced by [`crate::state::AppState`] operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A product id that is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}
