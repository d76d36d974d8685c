//! Order Models

use atelier_core::PricingBreakdown;
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        carts::models::SessionId,
        catalog::models::ProductUuid,
        designs::models::DesignUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

/// Checkout shipping destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

/// A line frozen at purchase time. Name and unit price are copied from the
/// product so later catalog edits cannot rewrite order history.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub product_uuid: ProductUuid,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub session_id: SessionId,
    pub user_email: Option<String>,
    pub status: OrderStatus,
    pub breakdown: PricingBreakdown,
    pub shipping_address: ShippingAddress,
    pub payment_ref: Option<String>,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_email: Option<String>,
    pub shipping_address: ShippingAddress,
    pub payment_ref: Option<String>,

    /// Designs consumed by customized lines in this order; each transitions
    /// to its terminal order-linked state when the order commits.
    pub design_uuids: Vec<DesignUuid>,
}
