//! Orders Repository

use crate::{
    domain::orders::models::{OrderRecord, OrderUuid},
    store::Tables,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemOrdersRepository;

impl MemOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn insert_order(&self, tables: &mut Tables, order: OrderRecord) {
        tables.orders.push(order);
    }

    pub(crate) fn get_order(&self, tables: &Tables, uuid: OrderUuid) -> Option<OrderRecord> {
        tables.orders.iter().find(|order| order.uuid == uuid).cloned()
    }
}
