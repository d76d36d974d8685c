//! Design Errors

use salvo::http::StatusError;

use atelier_app::domain::designs::DesignsServiceError;

pub(crate) fn into_status_error(error: DesignsServiceError) -> StatusError {
    match error {
        DesignsServiceError::InvalidCanvas => {
            StatusError::bad_request().brief("Canvas dimensions must be positive")
        }
        DesignsServiceError::OutOfCanvas { kind, index } => StatusError::bad_request()
            .brief(format!("{kind} element {index} lies outside the canvas")),
        DesignsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown product")
        }
        DesignsServiceError::NotFound => StatusError::not_found().brief("Design not found"),
        DesignsServiceError::AlreadyLinked => {
            StatusError::conflict().brief("Design is already linked to an order")
        }
    }
}
