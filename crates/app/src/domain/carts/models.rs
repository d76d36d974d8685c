//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;

use crate::{
    domain::catalog::models::{ProductRecord, ProductUuid},
    uuids::TypedUuid,
};

/// The shopping session a cart belongs to. Propagated explicitly by the
/// caller (an `x-session-id` header at the HTTP boundary).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// Cart Item Record
///
/// At most one record exists per `(session, product, size, color)` tuple;
/// adding a matching combination increments the quantity instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub session_id: SessionId,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// New Cart Item Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// A cart item joined with a snapshot of its product for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemWithProduct {
    pub item: CartItemRecord,
    pub product: ProductRecord,
}

/// Derived cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub total_items: u32,
    pub total_price: Decimal,
}

/// Outcome of a quantity update: zero removes the line.
#[derive(Debug, Clone, PartialEq)]
pub enum CartUpdate {
    Updated(CartItemWithProduct),
    Removed,
}
