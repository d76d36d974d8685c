//! Designs service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DesignsServiceError {
    #[error("canvas dimensions must be positive")]
    InvalidCanvas,

    /// An element sits partly or wholly outside the canvas, or has a
    /// non-positive extent.
    #[error("{kind} element {index} does not fit the canvas")]
    OutOfCanvas {
        kind: &'static str,
        index: usize,
    },

    #[error("related resource not found")]
    InvalidReference,

    #[error("design not found")]
    NotFound,

    /// The design is already linked to an order and is immutable.
    #[error("design is already linked to an order")]
    AlreadyLinked,
}
