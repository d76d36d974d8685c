//! Carts service.

use async_trait::async_trait;
use atelier_core::{PricedLine, subtotal, total_items};
use mockall::automock;

use crate::{
    domain::{
        carts::{
            MemCartsRepository,
            errors::CartsServiceError,
            models::{
                CartItemRecord, CartItemUuid, CartItemWithProduct, CartTotals, CartUpdate,
                NewCartItem, SessionId,
            },
        },
        catalog::MemCatalogRepository,
    },
    store::{Store, Tables},
};

#[derive(Debug, Clone)]
pub struct MemCartsService {
    store: Store,
    repository: MemCartsRepository,
    catalog: MemCatalogRepository,
}

impl MemCartsService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: MemCartsRepository::new(),
            catalog: MemCatalogRepository::new(),
        }
    }

    fn join_product(
        &self,
        tables: &Tables,
        item: CartItemRecord,
    ) -> Result<CartItemWithProduct, CartsServiceError> {
        let product = self
            .catalog
            .product(tables, item.product_uuid)
            .ok_or(CartsServiceError::ProductMissing)?;

        Ok(CartItemWithProduct { item, product })
    }
}

#[async_trait]
impl CartsService for MemCartsService {
    async fn list_items(
        &self,
        session: &SessionId,
    ) -> Result<Vec<CartItemWithProduct>, CartsServiceError> {
        let tables = self.store.read().await;

        self.repository
            .items_for_session(&tables, session)
            .into_iter()
            .map(|item| self.join_product(&tables, item))
            .collect()
    }

    async fn add_item(
        &self,
        session: &SessionId,
        item: NewCartItem,
    ) -> Result<CartItemWithProduct, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tables = self.store.write().await;

        if self.catalog.product(&tables, item.product_uuid).is_none() {
            return Err(CartsServiceError::InvalidReference);
        }

        let existing = self.repository.find_variant(
            &tables,
            session,
            item.product_uuid,
            item.size.as_deref(),
            item.color.as_deref(),
        );

        let record = match existing {
            Some(uuid) => {
                let merged = self
                    .repository
                    .get_item(&tables, uuid)
                    .map(|line| line.quantity.saturating_add(item.quantity))
                    .and_then(|quantity| self.repository.set_quantity(&mut tables, uuid, quantity));

                merged.ok_or(CartsServiceError::NotFound)?
            }
            None => self.repository.insert_item(&mut tables, session, item),
        };

        self.join_product(&tables, record)
    }

    async fn update_quantity(
        &self,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartUpdate, CartsServiceError> {
        let mut tables = self.store.write().await;

        if quantity == 0 {
            if !self.repository.remove_item(&mut tables, item) {
                return Err(CartsServiceError::NotFound);
            }

            return Ok(CartUpdate::Removed);
        }

        let record = self
            .repository
            .set_quantity(&mut tables, item, quantity)
            .ok_or(CartsServiceError::NotFound)?;

        self.join_product(&tables, record).map(CartUpdate::Updated)
    }

    async fn remove_item(&self, item: CartItemUuid) -> Result<(), CartsServiceError> {
        let mut tables = self.store.write().await;

        // Idempotent: removing an absent line is a no-op.
        self.repository.remove_item(&mut tables, item);

        Ok(())
    }

    async fn clear(&self, session: &SessionId) -> Result<(), CartsServiceError> {
        let mut tables = self.store.write().await;

        self.repository.clear_session(&mut tables, session);

        Ok(())
    }

    async fn totals(&self, session: &SessionId) -> Result<CartTotals, CartsServiceError> {
        let tables = self.store.read().await;

        let lines = self
            .repository
            .items_for_session(&tables, session)
            .into_iter()
            .map(|item| {
                self.join_product(&tables, item)
                    .map(|joined| PricedLine::new(joined.product.price, joined.item.quantity))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CartTotals {
            total_items: total_items(&lines),
            total_price: subtotal(&lines),
        })
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves the session's line items, joined with product snapshots.
    async fn list_items(
        &self,
        session: &SessionId,
    ) -> Result<Vec<CartItemWithProduct>, CartsServiceError>;

    /// Adds a line item. An existing `(product, size, color)` line in the
    /// same session has its quantity incremented instead.
    async fn add_item(
        &self,
        session: &SessionId,
        item: NewCartItem,
    ) -> Result<CartItemWithProduct, CartsServiceError>;

    /// Sets a line's quantity; zero removes the line.
    async fn update_quantity(
        &self,
        item: CartItemUuid,
        quantity: u32,
    ) -> Result<CartUpdate, CartsServiceError>;

    /// Removes a line item. A no-op when the line is already gone.
    async fn remove_item(&self, item: CartItemUuid) -> Result<(), CartsServiceError>;

    /// Empties the session's cart.
    async fn clear(&self, session: &SessionId) -> Result<(), CartsServiceError>;

    /// Derived item count and price total for the session's cart.
    async fn totals(&self, session: &SessionId) -> Result<CartTotals, CartsServiceError>;
}
