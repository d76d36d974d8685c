//! Design Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    domain::{catalog::models::ProductUuid, orders::models::OrderUuid},
    uuids::TypedUuid,
};

/// Design UUID
pub type DesignUuid = TypedUuid<DesignRecord>;

/// Text Element UUID
pub type TextElementUuid = TypedUuid<TextElementRecord>;

/// Image Element UUID
pub type ImageElementUuid = TypedUuid<ImageElementRecord>;

/// Canvas dimensions the client laid the elements out on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: f64,
    pub height: f64,
}

/// A positioned piece of text, as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub font_weight: String,
    pub rotation: f64,
}

/// A positioned image, as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    pub image_url: String,
    pub original_file_name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// Normalized text element row, owned by its design.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElementRecord {
    pub uuid: TextElementUuid,
    pub design_uuid: DesignUuid,
    pub element: TextElement,
}

/// Normalized image element row, owned by its design.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElementRecord {
    pub uuid: ImageElementUuid,
    pub design_uuid: DesignUuid,
    pub element: ImageElement,
}

/// Lifecycle of a design. DRAFT never persists: a design exists only once it
/// is saved, and linking it to an order is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStatus {
    Saved,
    OrderLinked,
}

/// Design Record
///
/// `design_data` is a denormalized convenience blob for quick canvas
/// reloads. It is rebuilt from the element rows on every save; the rows are
/// the source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRecord {
    pub uuid: DesignUuid,
    pub user_id: Option<String>,
    pub product_uuid: ProductUuid,
    pub order_uuid: Option<OrderUuid>,
    pub design_data: Value,
    pub preview_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DesignRecord {
    /// Current lifecycle state, derived from the order link.
    #[must_use]
    pub fn status(&self) -> DesignStatus {
        if self.order_uuid.is_some() {
            DesignStatus::OrderLinked
        } else {
            DesignStatus::Saved
        }
    }
}

/// A design joined with its element rows, in their canvas stacking order.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignWithElements {
    pub design: DesignRecord,
    pub text_elements: Vec<TextElementRecord>,
    pub image_elements: Vec<ImageElementRecord>,
}

/// New Design Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewDesign {
    pub user_id: Option<String>,
    pub product_uuid: ProductUuid,
    pub canvas: CanvasSpec,
    pub text_elements: Vec<TextElement>,
    pub image_elements: Vec<ImageElement>,
    pub preview_image_url: Option<String>,
}

/// Builds the `design_data` blob from the canvas and the element rows.
#[must_use]
pub fn design_data(canvas: CanvasSpec, element_count: usize) -> Value {
    json!({
        "canvas": canvas,
        "elementsCount": element_count,
    })
}
