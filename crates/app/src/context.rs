//! App Context

use std::sync::Arc;

use atelier_core::PricingConfig;

use crate::{
    domain::{
        carts::{CartsService, MemCartsService},
        catalog::{CatalogService, CatalogServiceError, MemCatalogService, seed::seed_catalog},
        designs::{DesignsService, MemDesignsService},
        orders::{MemOrdersService, OrdersService},
    },
    store::Store,
};

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub designs: Arc<dyn DesignsService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context over an empty in-memory store.
    #[must_use]
    pub fn new(pricing: PricingConfig) -> Self {
        Self::from_store(Store::new(), pricing)
    }

    /// Build application context with the starter catalog loaded.
    ///
    /// # Errors
    ///
    /// Returns an error when the starter catalog cannot be inserted.
    pub async fn seeded(pricing: PricingConfig) -> Result<Self, CatalogServiceError> {
        let store = Store::new();

        seed_catalog(&store).await?;

        Ok(Self::from_store(store, pricing))
    }

    fn from_store(store: Store, pricing: PricingConfig) -> Self {
        Self {
            catalog: Arc::new(MemCatalogService::new(store.clone())),
            carts: Arc::new(MemCartsService::new(store.clone())),
            designs: Arc::new(MemDesignsService::new(store.clone())),
            orders: Arc::new(MemOrdersService::new(store, pricing)),
        }
    }
}
