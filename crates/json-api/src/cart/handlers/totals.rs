//! Cart Totals Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Cart Totals Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartTotalsResponse {
    /// Total number of items across all lines
    pub total_items: u32,

    /// Sum of line totals as a decimal string
    pub total_price: String,
}

/// Cart Totals Handler
///
/// Returns the derived item count and price total for the session's cart.
#[endpoint(tags("cart"), summary = "Get Cart Totals")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartTotalsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_id();

    let totals = state
        .app
        .carts
        .totals(&session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartTotalsResponse {
        total_items: totals.total_items,
        total_price: totals.total_price.to_string(),
    }))
}
