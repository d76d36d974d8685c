//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogServiceError {
    #[error("a record with that slug already exists")]
    AlreadyExists,

    #[error("category or product not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,
}
