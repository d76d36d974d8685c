//! Orders service errors.

use atelier_core::PricingError;
use thiserror::Error;

use crate::domain::designs::models::DesignUuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrdersServiceError {
    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    #[error("design {0} not found")]
    DesignNotFound(DesignUuid),

    #[error("design {0} is already linked to an order")]
    DesignAlreadyLinked(DesignUuid),

    /// A cart line references a product that no longer exists.
    #[error("cart item references a missing product")]
    ProductMissing,

    #[error("order not found")]
    NotFound,

    #[error(transparent)]
    Pricing(#[from] PricingError),
}
