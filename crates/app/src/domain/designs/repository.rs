//! Designs Repository

use crate::{
    domain::{
        designs::models::{
            DesignRecord, DesignUuid, DesignWithElements, ImageElementRecord, TextElementRecord,
        },
        orders::models::OrderUuid,
    },
    store::Tables,
};

/// Outcome of a failed order link; each caller maps this into its own error
/// taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkError {
    NotFound,
    AlreadyLinked,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemDesignsRepository;

impl MemDesignsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts the parent record with its child rows in one step.
    pub(crate) fn insert_design(
        &self,
        tables: &mut Tables,
        design: DesignRecord,
        texts: Vec<TextElementRecord>,
        images: Vec<ImageElementRecord>,
    ) {
        let uuid = design.uuid;

        tables.designs.push(design);
        tables.design_texts.insert(uuid, texts);
        tables.design_images.insert(uuid, images);
    }

    pub(crate) fn get_design(
        &self,
        tables: &Tables,
        uuid: DesignUuid,
    ) -> Option<DesignWithElements> {
        let design = tables
            .designs
            .iter()
            .find(|design| design.uuid == uuid)
            .cloned()?;

        Some(self.join_elements(tables, design))
    }

    /// All designs owned by a user, newest first.
    pub(crate) fn designs_by_user(&self, tables: &Tables, user_id: &str) -> Vec<DesignWithElements> {
        tables
            .designs
            .iter()
            .rev()
            .filter(|design| design.user_id.as_deref() == Some(user_id))
            .cloned()
            .map(|design| self.join_elements(tables, design))
            .collect()
    }

    /// Marks a design as consumed by an order. Terminal: a linked design can
    /// never be re-linked.
    pub(crate) fn link_to_order(
        &self,
        tables: &mut Tables,
        design: DesignUuid,
        order: OrderUuid,
    ) -> Result<(), LinkError> {
        let record = tables
            .designs
            .iter_mut()
            .find(|record| record.uuid == design)
            .ok_or(LinkError::NotFound)?;

        if record.order_uuid.is_some() {
            return Err(LinkError::AlreadyLinked);
        }

        record.order_uuid = Some(order);

        Ok(())
    }

    /// Whether linking would succeed, without mutating anything. Used to
    /// validate a whole batch before an order commits.
    pub(crate) fn check_linkable(&self, tables: &Tables, design: DesignUuid) -> Result<(), LinkError> {
        let record = tables
            .designs
            .iter()
            .find(|record| record.uuid == design)
            .ok_or(LinkError::NotFound)?;

        if record.order_uuid.is_some() {
            return Err(LinkError::AlreadyLinked);
        }

        Ok(())
    }

    fn join_elements(&self, tables: &Tables, design: DesignRecord) -> DesignWithElements {
        let text_elements = tables
            .design_texts
            .get(&design.uuid)
            .cloned()
            .unwrap_or_default();

        let image_elements = tables
            .design_images
            .get(&design.uuid)
            .cloned()
            .unwrap_or_default();

        DesignWithElements {
            design,
            text_elements,
            image_elements,
        }
    }
}
