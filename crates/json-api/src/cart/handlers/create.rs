//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::carts::models::NewCartItem;

use crate::{
    cart::errors::into_status_error, cart::index::CartItemResponse, extensions::*, state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub product_uuid: Uuid,
    pub quantity: u32,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Add Cart Item Handler
///
/// Adds a line to the session's cart. A line with the same product, size and
/// color already in the cart has its quantity incremented instead.
#[endpoint(
    tags("cart"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Line added or merged"),
        (status_code = StatusCode::BAD_REQUEST, description = "Zero quantity or unknown product"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_id();
    let request = json.into_inner();

    let item = state
        .app
        .carts
        .add_item(
            &session,
            NewCartItem {
                product_uuid: request.product_uuid.into(),
                quantity: request.quantity,
                size: request.size,
                color: request.color,
            },
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(item.into()))
}
