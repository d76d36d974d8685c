//! Cart Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::carts::models::CartItemWithProduct;

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Snapshot of the product a cart line points at, for display.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartProductResponse {
    /// Product UUID
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// URL-safe identifier
    pub slug: String,

    /// Unit price as a decimal string
    pub price: String,

    /// Gallery image URLs
    pub images: Vec<String>,

    /// Whether the product can currently be purchased
    pub in_stock: bool,
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// Cart line UUID
    pub uuid: Uuid,

    /// Line quantity
    pub quantity: u32,

    /// Chosen size, if the product has sizes
    pub size: Option<String>,

    /// Chosen color, if the product has colors
    pub color: Option<String>,

    /// The product this line points at
    pub product: CartProductResponse,
}

impl From<CartItemWithProduct> for CartItemResponse {
    fn from(joined: CartItemWithProduct) -> Self {
        CartItemResponse {
            uuid: joined.item.uuid.into(),
            quantity: joined.item.quantity,
            size: joined.item.size,
            color: joined.item.color,
            product: CartProductResponse {
                uuid: joined.product.uuid.into(),
                name: joined.product.name,
                slug: joined.product.slug,
                price: joined.product.price.to_string(),
                images: joined.product.images,
                in_stock: joined.product.in_stock,
            },
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The session's line items, oldest first
    pub items: Vec<CartItemResponse>,
}

/// Cart Index Handler
///
/// Returns the session's cart, joined with product snapshots.
#[endpoint(tags("cart"), summary = "Get Cart")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_id();

    let items = state
        .app
        .carts
        .list_items(&session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
