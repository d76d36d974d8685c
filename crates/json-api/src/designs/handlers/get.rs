//! Get Design Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use atelier_app::domain::designs::models::{
    DesignStatus, DesignWithElements, ImageElement, ImageElementRecord, TextElement,
    TextElementRecord,
};

use crate::{designs::errors::into_status_error, extensions::*, state::State};

/// A positioned piece of text on the canvas.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TextElementResponse {
    /// Element UUID
    pub uuid: Uuid,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub font_weight: String,
    pub rotation: f64,
}

impl From<TextElementRecord> for TextElementResponse {
    fn from(record: TextElementRecord) -> Self {
        let TextElement {
            text,
            x,
            y,
            font_size,
            font_family,
            color,
            font_weight,
            rotation,
        } = record.element;

        TextElementResponse {
            uuid: record.uuid.into(),
            text,
            x,
            y,
            font_size,
            font_family,
            color,
            font_weight,
            rotation,
        }
    }
}

/// A positioned image on the canvas.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageElementResponse {
    /// Element UUID
    pub uuid: Uuid,
    pub image_url: String,
    pub original_file_name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl From<ImageElementRecord> for ImageElementResponse {
    fn from(record: ImageElementRecord) -> Self {
        let ImageElement {
            image_url,
            original_file_name,
            x,
            y,
            width,
            height,
            rotation,
        } = record.element;

        ImageElementResponse {
            uuid: record.uuid.into(),
            image_url,
            original_file_name,
            x,
            y,
            width,
            height,
            rotation,
        }
    }
}

/// Design Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DesignResponse {
    /// Design UUID
    pub uuid: Uuid,

    /// The user who saved the design, if known
    pub user_id: Option<String>,

    /// The product the design was laid out on
    pub product_uuid: Uuid,

    /// The order that consumed the design, once placed
    pub order_uuid: Option<Uuid>,

    /// Lifecycle state: `saved` or `order_linked`
    pub status: String,

    /// Canvas blob for quick reloads
    pub design_data: Value,

    /// Rendered preview image URL, if the client uploaded one
    pub preview_image_url: Option<String>,

    /// The date and time the design was first saved
    pub created_at: String,

    /// The date and time the design was last saved
    pub updated_at: String,

    /// Text elements, in canvas stacking order
    pub text_elements: Vec<TextElementResponse>,

    /// Image elements, in canvas stacking order
    pub image_elements: Vec<ImageElementResponse>,
}

impl From<DesignWithElements> for DesignResponse {
    fn from(joined: DesignWithElements) -> Self {
        let status = match joined.design.status() {
            DesignStatus::Saved => "saved",
            DesignStatus::OrderLinked => "order_linked",
        };

        DesignResponse {
            uuid: joined.design.uuid.into(),
            user_id: joined.design.user_id,
            product_uuid: joined.design.product_uuid.into(),
            order_uuid: joined.design.order_uuid.map(Into::into),
            status: status.to_owned(),
            design_data: joined.design.design_data,
            preview_image_url: joined.design.preview_image_url,
            created_at: joined.design.created_at.to_string(),
            updated_at: joined.design.updated_at.to_string(),
            text_elements: joined.text_elements.into_iter().map(Into::into).collect(),
            image_elements: joined.image_elements.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Design Handler
///
/// Returns a design with its elements joined.
#[endpoint(tags("designs"), summary = "Get Design")]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<DesignResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let design = state
        .app
        .designs
        .get_design(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(design.into()))
}
