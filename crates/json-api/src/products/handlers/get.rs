//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::catalog::models::ProductWithCategory;

use crate::{
    categories::get::CategoryResponse, extensions::*, products::errors::into_status_error,
    state::State,
};

/// Product Response
///
/// Prices travel as decimal strings so clients never round them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// URL-safe identifier
    pub slug: String,

    /// Optional long-form description
    pub description: Option<String>,

    /// Unit price as a decimal string, e.g. `"12990.00"`
    pub price: String,

    /// The category the product belongs to, if any
    pub category: Option<CategoryResponse>,

    /// Gallery image URLs
    pub images: Vec<String>,

    /// Available sizes, in merchandising order
    pub sizes: Vec<String>,

    /// Available colors, in merchandising order
    pub colors: Vec<String>,

    /// Whether the product can currently be purchased
    pub in_stock: bool,

    /// Whether the product is featured on the storefront
    pub featured: bool,

    /// The date and time the product was created
    pub created_at: String,
}

impl From<ProductWithCategory> for ProductResponse {
    fn from(joined: ProductWithCategory) -> Self {
        let product = joined.product;

        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price.to_string(),
            category: joined.category.map(Into::into),
            images: product.images,
            sizes: product.sizes,
            colors: product.colors,
            in_stock: product.in_stock,
            featured: product.featured,
            created_at: product.created_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product by its slug, joined with its category.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .catalog
        .get_product_by_slug(&slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
