//! Carts service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("related resource not found")]
    InvalidReference,

    #[error("cart item not found")]
    NotFound,

    /// A stored line references a product that no longer exists. Surfaced as
    /// an internal error; the catalog never deletes products out from under
    /// carts in normal operation.
    #[error("cart item references a missing product")]
    ProductMissing,
}
