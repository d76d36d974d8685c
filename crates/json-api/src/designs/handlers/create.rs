//! Save Design Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::designs::models::{CanvasSpec, ImageElement, NewDesign, TextElement};

use crate::{designs::errors::into_status_error, extensions::*, state::State};

/// Canvas dimensions the elements were laid out on.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CanvasRequest {
    pub width: f64,
    pub height: f64,
}

/// A positioned piece of text, as laid out by the client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TextElementRequest {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub font_weight: String,
    #[serde(default)]
    pub rotation: f64,
}

impl From<TextElementRequest> for TextElement {
    fn from(request: TextElementRequest) -> Self {
        TextElement {
            text: request.text,
            x: request.x,
            y: request.y,
            font_size: request.font_size,
            font_family: request.font_family,
            color: request.color,
            font_weight: request.font_weight,
            rotation: request.rotation,
        }
    }
}

/// A positioned image, as laid out by the client.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageElementRequest {
    pub image_url: String,
    #[serde(default)]
    pub original_file_name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

impl From<ImageElementRequest> for ImageElement {
    fn from(request: ImageElementRequest) -> Self {
        ImageElement {
            image_url: request.image_url,
            original_file_name: request.original_file_name,
            x: request.x,
            y: request.y,
            width: request.width,
            height: request.height,
            rotation: request.rotation,
        }
    }
}

/// Save Design Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaveDesignRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub product_uuid: Uuid,
    pub canvas: CanvasRequest,
    #[serde(default)]
    pub text_elements: Vec<TextElementRequest>,
    #[serde(default)]
    pub image_elements: Vec<ImageElementRequest>,
    #[serde(default)]
    pub preview_image_url: Option<String>,
}

/// Design Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DesignCreatedResponse {
    /// Created design UUID
    pub uuid: Uuid,
}

/// Save Design Handler
///
/// Saves a fresh design. Every save creates a new design; linked designs are
/// never edited in place.
#[endpoint(
    tags("designs"),
    summary = "Save Design",
    responses(
        (status_code = StatusCode::CREATED, description = "Design saved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Element outside the canvas or unknown product"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SaveDesignRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DesignCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let design = state
        .app
        .designs
        .save_design(NewDesign {
            user_id: request.user_id,
            product_uuid: request.product_uuid.into(),
            canvas: CanvasSpec {
                width: request.canvas.width,
                height: request.canvas.height,
            },
            text_elements: request.text_elements.into_iter().map(Into::into).collect(),
            image_elements: request.image_elements.into_iter().map(Into::into).collect(),
            preview_image_url: request.preview_image_url,
        })
        .await
        .map_err(into_status_error)?;

    let uuid = design.design.uuid;

    res.add_header(LOCATION, format!("/api/custom-designs/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(DesignCreatedResponse { uuid: uuid.into() }))
}
