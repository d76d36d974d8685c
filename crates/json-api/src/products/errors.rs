//! Product Errors

use salvo::http::StatusError;

use atelier_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        CatalogServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product slug already exists")
        }
        CatalogServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown category")
        }
    }
}
