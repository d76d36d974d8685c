//! Search Products Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::errors::into_status_error,
    products::index::ProductsResponse,
    state::State,
};

/// Search Products Handler
///
/// Case-insensitive substring search over product names and descriptions.
/// A missing or blank `q` is a client error.
#[endpoint(
    tags("products"),
    summary = "Search Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or blank query"),
    ),
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = q
        .into_inner()
        .filter(|query| !query.trim().is_empty())
        .ok_or_else(|| StatusError::bad_request().brief("Missing search query"))?;

    let products = state
        .app
        .catalog
        .search_products(&query)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
