//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use atelier_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        OrdersServiceError::DesignNotFound(_) => StatusError::bad_request().brief("Unknown design"),
        OrdersServiceError::DesignAlreadyLinked(_) => {
            StatusError::conflict().brief("Design is already linked to an order")
        }
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::ProductMissing => {
            error!("cart line references a product that no longer exists");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Pricing(source) => {
            error!("failed to price the cart: {source}");

            StatusError::internal_server_error()
        }
    }
}
