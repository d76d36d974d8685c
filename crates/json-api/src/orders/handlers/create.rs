//! Place Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::orders::models::{NewOrder, ShippingAddress};

use crate::{
    extensions::*, orders::errors::into_status_error, orders::get::OrderResponse, state::State,
};

/// Checkout shipping destination.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShippingAddressRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl From<ShippingAddressRequest> for ShippingAddress {
    fn from(request: ShippingAddressRequest) -> Self {
        ShippingAddress {
            name: request.name,
            email: request.email,
            address: request.address,
            city: request.city,
            postal_code: request.postal_code,
        }
    }
}

/// Place Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceOrderRequest {
    #[serde(default)]
    pub user_email: Option<String>,
    pub shipping_address: ShippingAddressRequest,
    #[serde(default)]
    pub payment_ref: Option<String>,

    /// Designs consumed by customized lines in this order
    #[serde(default)]
    pub design_uuids: Vec<Uuid>,
}

/// Place Order Handler
///
/// Places an order from the session's cart, freezing line prices and the
/// derived totals, linking the referenced designs and emptying the cart.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or unknown design"),
        (status_code = StatusCode::CONFLICT, description = "Design already linked to an order"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<PlaceOrderRequest>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_id();
    let request = json.into_inner();

    let order = state
        .app
        .orders
        .place_order(
            &session,
            NewOrder {
                user_email: request.user_email,
                shipping_address: request.shipping_address.into(),
                payment_ref: request.payment_ref,
                design_uuids: request.design_uuids.into_iter().map(Into::into).collect(),
            },
        )
        .await
        .map_err(into_status_error)?;

    let uuid = order.uuid;

    res.add_header(LOCATION, format!("/api/orders/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
