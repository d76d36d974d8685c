//! In-memory persistence.
//!
//! One [`Store`] holds every table behind a single `RwLock`. A write guard
//! spans a whole operation the way a database transaction would, so
//! multi-table writes (order placement, design saves) are atomic: validation
//! happens before the first mutation, and no other writer can interleave.
//!
//! Top-level tables are insertion-ordered `Vec`s; listings therefore come
//! back in creation order without any secondary sort key.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{
    carts::models::CartItemRecord,
    catalog::models::{CategoryRecord, ProductRecord},
    designs::models::{DesignRecord, DesignUuid, ImageElementRecord, TextElementRecord},
    orders::models::OrderRecord,
};

/// The raw tables. Repositories operate on these directly while a service
/// holds the store guard.
#[derive(Debug, Default)]
pub struct Tables {
    pub(crate) categories: Vec<CategoryRecord>,
    pub(crate) products: Vec<ProductRecord>,
    pub(crate) cart_items: Vec<CartItemRecord>,
    pub(crate) designs: Vec<DesignRecord>,
    pub(crate) design_texts: FxHashMap<DesignUuid, Vec<TextElementRecord>>,
    pub(crate) design_images: FxHashMap<DesignUuid, Vec<ImageElementRecord>>,
    pub(crate) orders: Vec<OrderRecord>,
}

/// Cheaply cloneable handle to the shared tables.
#[derive(Debug, Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire shared read access for one operation.
    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    /// Acquire exclusive write access for one operation.
    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
