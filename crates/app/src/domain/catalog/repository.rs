//! Catalog Repository
//!
//! Operates on the raw in-memory tables; callers hold a store guard for the
//! duration of an operation, which is what makes multi-step writes atomic.
//! Tables are insertion-ordered, so listings come back in creation order.

use jiff::Timestamp;

use crate::{
    domain::catalog::{
        errors::CatalogServiceError,
        models::{
            CategoryRecord, CategoryUuid, NewCategory, NewProduct, ProductFilter, ProductRecord,
            ProductUuid, ProductWithCategory,
        },
    },
    store::Tables,
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MemCatalogRepository;

impl MemCatalogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn list_categories(&self, tables: &Tables) -> Vec<CategoryRecord> {
        tables.categories.clone()
    }

    pub(crate) fn category_by_slug(&self, tables: &Tables, slug: &str) -> Option<CategoryRecord> {
        tables
            .categories
            .iter()
            .find(|category| category.slug == slug)
            .cloned()
    }

    pub(crate) fn insert_category(
        &self,
        tables: &mut Tables,
        new: NewCategory,
    ) -> Result<CategoryRecord, CatalogServiceError> {
        if self.category_by_slug(tables, &new.slug).is_some() {
            return Err(CatalogServiceError::AlreadyExists);
        }

        let record = CategoryRecord {
            uuid: CategoryUuid::new(),
            name: new.name,
            slug: new.slug,
            description: new.description,
            image_url: new.image_url,
        };

        tables.categories.push(record.clone());

        Ok(record)
    }

    pub(crate) fn list_products(
        &self,
        tables: &Tables,
        filter: &ProductFilter,
    ) -> Vec<ProductWithCategory> {
        let category_uuid = filter
            .category_slug
            .as_deref()
            .map(|slug| self.category_by_slug(tables, slug).map(|category| category.uuid));

        tables
            .products
            .iter()
            .filter(|product| match category_uuid {
                // Filter requested but the slug matched no category.
                Some(None) => false,
                Some(Some(uuid)) => product.category_uuid == Some(uuid),
                None => true,
            })
            .filter(|product| {
                filter
                    .featured
                    .is_none_or(|featured| product.featured == featured)
            })
            .cloned()
            .map(|product| self.with_category(tables, product))
            .collect()
    }

    pub(crate) fn search_products(&self, tables: &Tables, query: &str) -> Vec<ProductWithCategory> {
        let term = query.to_lowercase();

        tables
            .products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&term)
                    || product
                        .description
                        .as_deref()
                        .is_some_and(|description| description.to_lowercase().contains(&term))
            })
            .cloned()
            .map(|product| self.with_category(tables, product))
            .collect()
    }

    pub(crate) fn product_by_slug(
        &self,
        tables: &Tables,
        slug: &str,
    ) -> Option<ProductWithCategory> {
        tables
            .products
            .iter()
            .find(|product| product.slug == slug)
            .cloned()
            .map(|product| self.with_category(tables, product))
    }

    pub(crate) fn product(&self, tables: &Tables, uuid: ProductUuid) -> Option<ProductRecord> {
        tables
            .products
            .iter()
            .find(|product| product.uuid == uuid)
            .cloned()
    }

    pub(crate) fn insert_product(
        &self,
        tables: &mut Tables,
        new: NewProduct,
    ) -> Result<ProductRecord, CatalogServiceError> {
        if tables.products.iter().any(|product| product.slug == new.slug) {
            return Err(CatalogServiceError::AlreadyExists);
        }

        if let Some(category_uuid) = new.category_uuid {
            if !tables
                .categories
                .iter()
                .any(|category| category.uuid == category_uuid)
            {
                return Err(CatalogServiceError::InvalidReference);
            }
        }

        let record = ProductRecord {
            uuid: ProductUuid::new(),
            name: new.name,
            slug: new.slug,
            description: new.description,
            price: new.price,
            category_uuid: new.category_uuid,
            images: new.images,
            sizes: new.sizes,
            colors: new.colors,
            in_stock: new.in_stock,
            featured: new.featured,
            created_at: Timestamp::now(),
        };

        tables.products.push(record.clone());

        Ok(record)
    }

    fn with_category(&self, tables: &Tables, product: ProductRecord) -> ProductWithCategory {
        let category = product.category_uuid.and_then(|uuid| {
            tables
                .categories
                .iter()
                .find(|category| category.uuid == uuid)
                .cloned()
        });

        ProductWithCategory { product, category }
    }
}
