//! User Designs Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    designs::errors::into_status_error, designs::get::DesignResponse, extensions::*, state::State,
};

/// User Designs Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DesignsResponse {
    /// The user's designs, newest first
    pub designs: Vec<DesignResponse>,
}

/// User Designs Index Handler
///
/// Returns a user's designs, newest first. An unknown user simply has none.
#[endpoint(tags("designs"), summary = "List User Designs")]
pub(crate) async fn handler(
    user: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DesignsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let designs = state
        .app
        .designs
        .list_designs_by_user(&user.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(DesignsResponse {
        designs: designs.into_iter().map(Into::into).collect(),
    }))
}
