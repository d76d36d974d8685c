//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::catalog::models::NewProduct;

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price as a decimal string, e.g. `"12990.00"`
    pub price: String,

    #[serde(default)]
    pub category_uuid: Option<Uuid>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
}

fn default_in_stock() -> bool {
    true
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Created product UUID
    pub uuid: Uuid,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product slug already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let price = request
        .price
        .parse::<Decimal>()
        .map_err(|_ignored| StatusError::bad_request().brief("Invalid price"))?;

    let slug = request.slug.clone();

    let product = state
        .app
        .catalog
        .create_product(NewProduct {
            name: request.name,
            slug: request.slug,
            description: request.description,
            price,
            category_uuid: request.category_uuid.map(Into::into),
            images: request.images,
            sizes: request.sizes,
            colors: request.colors,
            in_stock: request.in_stock,
            featured: request.featured,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/products/{slug}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        uuid: product.uuid.into(),
    }))
}
