//! Designs service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    domain::{
        catalog::MemCatalogRepository,
        designs::{
            LinkError, MemDesignsRepository,
            errors::DesignsServiceError,
            models::{
                CanvasSpec, DesignRecord, DesignUuid, DesignWithElements, ImageElement,
                ImageElementRecord, ImageElementUuid, NewDesign, TextElement, TextElementRecord,
                TextElementUuid, design_data,
            },
        },
        orders::models::OrderUuid,
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct MemDesignsService {
    store: Store,
    repository: MemDesignsRepository,
    catalog: MemCatalogRepository,
}

impl MemDesignsService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: MemDesignsRepository::new(),
            catalog: MemCatalogRepository::new(),
        }
    }
}

fn validate_canvas(canvas: CanvasSpec) -> Result<(), DesignsServiceError> {
    let valid = canvas.width.is_finite()
        && canvas.height.is_finite()
        && canvas.width > 0.0
        && canvas.height > 0.0;

    if valid {
        Ok(())
    } else {
        Err(DesignsServiceError::InvalidCanvas)
    }
}

fn validate_text_element(
    canvas: CanvasSpec,
    index: usize,
    element: &TextElement,
) -> Result<(), DesignsServiceError> {
    let fits = element.x.is_finite()
        && element.y.is_finite()
        && element.font_size.is_finite()
        && element.font_size > 0.0
        && (0.0..=canvas.width).contains(&element.x)
        && (0.0..=canvas.height).contains(&element.y);

    if fits {
        Ok(())
    } else {
        Err(DesignsServiceError::OutOfCanvas {
            kind: "text",
            index,
        })
    }
}

fn validate_image_element(
    canvas: CanvasSpec,
    index: usize,
    element: &ImageElement,
) -> Result<(), DesignsServiceError> {
    let fits = element.x.is_finite()
        && element.y.is_finite()
        && element.width.is_finite()
        && element.height.is_finite()
        && element.width > 0.0
        && element.height > 0.0
        && element.x >= 0.0
        && element.y >= 0.0
        && element.x + element.width <= canvas.width
        && element.y + element.height <= canvas.height;

    if fits {
        Ok(())
    } else {
        Err(DesignsServiceError::OutOfCanvas {
            kind: "image",
            index,
        })
    }
}

#[async_trait]
impl DesignsService for MemDesignsService {
    async fn save_design(
        &self,
        design: NewDesign,
    ) -> Result<DesignWithElements, DesignsServiceError> {
        validate_canvas(design.canvas)?;

        for (index, element) in design.text_elements.iter().enumerate() {
            validate_text_element(design.canvas, index, element)?;
        }

        for (index, element) in design.image_elements.iter().enumerate() {
            validate_image_element(design.canvas, index, element)?;
        }

        let mut tables = self.store.write().await;

        if self.catalog.product(&tables, design.product_uuid).is_none() {
            return Err(DesignsServiceError::InvalidReference);
        }

        let uuid = DesignUuid::new();
        let now = Timestamp::now();
        let element_count = design.text_elements.len() + design.image_elements.len();

        let record = DesignRecord {
            uuid,
            user_id: design.user_id,
            product_uuid: design.product_uuid,
            order_uuid: None,
            design_data: design_data(design.canvas, element_count),
            preview_image_url: design.preview_image_url,
            created_at: now,
            updated_at: now,
        };

        let texts = design
            .text_elements
            .into_iter()
            .map(|element| TextElementRecord {
                uuid: TextElementUuid::new(),
                design_uuid: uuid,
                element,
            })
            .collect();

        let images = design
            .image_elements
            .into_iter()
            .map(|element| ImageElementRecord {
                uuid: ImageElementUuid::new(),
                design_uuid: uuid,
                element,
            })
            .collect();

        self.repository
            .insert_design(&mut tables, record, texts, images);

        self.repository
            .get_design(&tables, uuid)
            .ok_or(DesignsServiceError::NotFound)
    }

    async fn get_design(&self, design: DesignUuid) -> Result<DesignWithElements, DesignsServiceError> {
        let tables = self.store.read().await;

        self.repository
            .get_design(&tables, design)
            .ok_or(DesignsServiceError::NotFound)
    }

    async fn list_designs_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<DesignWithElements>, DesignsServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.designs_by_user(&tables, user_id))
    }

    async fn attach_to_order(
        &self,
        design: DesignUuid,
        order: OrderUuid,
    ) -> Result<(), DesignsServiceError> {
        let mut tables = self.store.write().await;

        self.repository
            .link_to_order(&mut tables, design, order)
            .map_err(|error| match error {
                LinkError::NotFound => DesignsServiceError::NotFound,
                LinkError::AlreadyLinked => DesignsServiceError::AlreadyLinked,
            })
    }
}

#[automock]
#[async_trait]
pub trait DesignsService: Send + Sync {
    /// Validates and persists a design with its element rows. Always creates
    /// a fresh design; saved designs are replaced, not mutated.
    async fn save_design(
        &self,
        design: NewDesign,
    ) -> Result<DesignWithElements, DesignsServiceError>;

    /// Retrieves a design with its elements joined.
    async fn get_design(&self, design: DesignUuid)
    -> Result<DesignWithElements, DesignsServiceError>;

    /// Retrieves a user's designs, newest first.
    async fn list_designs_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<DesignWithElements>, DesignsServiceError>;

    /// Links a design to the order that consumed it. Terminal: the design is
    /// immutable afterwards and can never be re-linked.
    async fn attach_to_order(
        &self,
        design: DesignUuid,
        order: OrderUuid,
    ) -> Result<(), DesignsServiceError>;
}
