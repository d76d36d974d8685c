//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::carts::models::CartUpdate;

use crate::{
    cart::errors::into_status_error, cart::index::CartItemResponse, extensions::*, state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New line quantity; zero removes the line
    pub quantity: u32,
}

/// Update Cart Item Handler
///
/// Sets a line's quantity. Zero removes the line and answers 204.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Line updated"),
        (status_code = StatusCode::NO_CONTENT, description = "Line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let update = state
        .app
        .carts
        .update_quantity(uuid.into_inner().into(), json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    match update {
        CartUpdate::Updated(item) => res.render(Json(CartItemResponse::from(item))),
        CartUpdate::Removed => {
            res.status_code(StatusCode::NO_CONTENT);
        }
    }

    Ok(())
}
