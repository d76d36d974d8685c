//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_core::PricingBreakdown;

use atelier_app::domain::orders::models::{
    OrderItemRecord, OrderRecord, OrderStatus, ShippingAddress,
};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Checkout shipping destination.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShippingAddressResponse {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl From<ShippingAddress> for ShippingAddressResponse {
    fn from(address: ShippingAddress) -> Self {
        ShippingAddressResponse {
            name: address.name,
            email: address.email,
            address: address.address,
            city: address.city,
            postal_code: address.postal_code,
        }
    }
}

/// A line frozen at purchase time.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItemResponse {
    /// The product the line was priced from
    pub product_uuid: Uuid,

    /// Product name at purchase time
    pub name: String,

    /// Unit price at purchase time, as a decimal string
    pub unit_price: String,

    /// Line quantity
    pub quantity: u32,

    /// Chosen size
    pub size: Option<String>,

    /// Chosen color
    pub color: Option<String>,
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        OrderItemResponse {
            product_uuid: item.product_uuid.into(),
            name: item.name,
            unit_price: item.unit_price.to_string(),
            quantity: item.quantity,
            size: item.size,
            color: item.color,
        }
    }
}

/// The derived totals frozen when the order was placed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BreakdownResponse {
    /// Sum of rounded line totals, as a decimal string
    pub subtotal: String,

    /// Shipping fee, as a decimal string
    pub shipping_fee: String,

    /// Tax amount, as a decimal string
    pub tax_amount: String,

    /// Grand total, as a decimal string
    pub total: String,
}

impl From<PricingBreakdown> for BreakdownResponse {
    fn from(breakdown: PricingBreakdown) -> Self {
        BreakdownResponse {
            subtotal: breakdown.subtotal.to_string(),
            shipping_fee: breakdown.shipping_fee.to_string(),
            tax_amount: breakdown.tax_amount.to_string(),
            total: breakdown.total.to_string(),
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// Order UUID
    pub uuid: Uuid,

    /// Lifecycle status, e.g. `pending`
    pub status: String,

    /// Customer email, if supplied at checkout
    pub user_email: Option<String>,

    /// Shipping destination
    pub shipping_address: ShippingAddressResponse,

    /// External payment reference, if any
    pub payment_ref: Option<String>,

    /// The frozen lines
    pub items: Vec<OrderItemResponse>,

    /// The frozen totals
    pub breakdown: BreakdownResponse,

    /// The date and time the order was placed
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        let status = match order.status {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };

        OrderResponse {
            uuid: order.uuid.into(),
            status: status.to_owned(),
            user_email: order.user_email,
            shipping_address: order.shipping_address.into(),
            payment_ref: order.payment_ref,
            items: order.items.into_iter().map(Into::into).collect(),
            breakdown: order.breakdown.into(),
            created_at: order.created_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns a placed order with its frozen lines and totals.
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
