//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use atelier_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be positive")
        }
        CartsServiceError::InvalidReference => StatusError::bad_request().brief("Unknown product"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart item not found"),
        CartsServiceError::ProductMissing => {
            error!("cart line references a product that no longer exists");

            StatusError::internal_server_error()
        }
    }
}
