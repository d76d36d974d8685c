//! Cart Items Repository

use crate::{
    domain::{
        carts::models::{CartItemRecord, CartItemUuid, NewCartItem, SessionId},
        catalog::models::ProductUuid,
    },
    store::Tables,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemCartsRepository;

impl MemCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn items_for_session(
        &self,
        tables: &Tables,
        session: &SessionId,
    ) -> Vec<CartItemRecord> {
        tables
            .cart_items
            .iter()
            .filter(|item| &item.session_id == session)
            .cloned()
            .collect()
    }

    pub(crate) fn get_item(
        &self,
        tables: &Tables,
        uuid: CartItemUuid,
    ) -> Option<CartItemRecord> {
        tables
            .cart_items
            .iter()
            .find(|item| item.uuid == uuid)
            .cloned()
    }

    /// Finds the line matching the full `(session, product, size, color)`
    /// variant tuple, if one exists.
    pub(crate) fn find_variant(
        &self,
        tables: &Tables,
        session: &SessionId,
        product: ProductUuid,
        size: Option<&str>,
        color: Option<&str>,
    ) -> Option<CartItemUuid> {
        tables
            .cart_items
            .iter()
            .find(|item| {
                &item.session_id == session
                    && item.product_uuid == product
                    && item.size.as_deref() == size
                    && item.color.as_deref() == color
            })
            .map(|item| item.uuid)
    }

    pub(crate) fn insert_item(
        &self,
        tables: &mut Tables,
        session: &SessionId,
        new: NewCartItem,
    ) -> CartItemRecord {
        let record = CartItemRecord {
            uuid: CartItemUuid::new(),
            session_id: session.clone(),
            product_uuid: new.product_uuid,
            quantity: new.quantity,
            size: new.size,
            color: new.color,
        };

        tables.cart_items.push(record.clone());

        record
    }

    /// Sets the quantity of an existing line. Returns the updated record, or
    /// `None` when the line does not exist.
    pub(crate) fn set_quantity(
        &self,
        tables: &mut Tables,
        uuid: CartItemUuid,
        quantity: u32,
    ) -> Option<CartItemRecord> {
        let item = tables.cart_items.iter_mut().find(|item| item.uuid == uuid)?;

        item.quantity = quantity;

        Some(item.clone())
    }

    /// Removes a line. Returns whether a line was actually removed.
    pub(crate) fn remove_item(&self, tables: &mut Tables, uuid: CartItemUuid) -> bool {
        let before = tables.cart_items.len();

        tables.cart_items.retain(|item| item.uuid != uuid);

        tables.cart_items.len() != before
    }

    pub(crate) fn clear_session(&self, tables: &mut Tables, session: &SessionId) {
        tables.cart_items.retain(|item| &item.session_id != session);
    }
}
