//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::catalog::{
        MemCatalogRepository,
        errors::CatalogServiceError,
        models::{
            CategoryRecord, NewCategory, NewProduct, ProductFilter, ProductRecord, ProductUuid,
            ProductWithCategory,
        },
    },
    store::Store,
};

#[derive(Debug, Clone)]
pub struct MemCatalogService {
    store: Store,
    repository: MemCatalogRepository,
}

impl MemCatalogService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            repository: MemCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for MemCatalogService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CatalogServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.list_categories(&tables))
    }

    async fn get_category_by_slug(
        &self,
        slug: &str,
    ) -> Result<CategoryRecord, CatalogServiceError> {
        let tables = self.store.read().await;

        self.repository
            .category_by_slug(&tables, slug)
            .ok_or(CatalogServiceError::NotFound)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CatalogServiceError> {
        let mut tables = self.store.write().await;

        self.repository.insert_category(&mut tables, category)
    }

    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductWithCategory>, CatalogServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.list_products(&tables, &filter))
    }

    async fn search_products(
        &self,
        query: &str,
    ) -> Result<Vec<ProductWithCategory>, CatalogServiceError> {
        let tables = self.store.read().await;

        Ok(self.repository.search_products(&tables, query))
    }

    async fn get_product_by_slug(
        &self,
        slug: &str,
    ) -> Result<ProductWithCategory, CatalogServiceError> {
        let tables = self.store.read().await;

        self.repository
            .product_by_slug(&tables, slug)
            .ok_or(CatalogServiceError::NotFound)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, CatalogServiceError> {
        let tables = self.store.read().await;

        self.repository
            .product(&tables, product)
            .ok_or(CatalogServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, CatalogServiceError> {
        let mut tables = self.store.write().await;

        self.repository.insert_product(&mut tables, product)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all categories, oldest first.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CatalogServiceError>;

    /// Retrieves a single category by its slug.
    async fn get_category_by_slug(&self, slug: &str)
    -> Result<CategoryRecord, CatalogServiceError>;

    /// Creates a new category. Slugs are unique.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CatalogServiceError>;

    /// Retrieves products matching the filter, joined with their categories.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductWithCategory>, CatalogServiceError>;

    /// Case-insensitive substring search over product names and descriptions.
    async fn search_products(
        &self,
        query: &str,
    ) -> Result<Vec<ProductWithCategory>, CatalogServiceError>;

    /// Retrieves a single product by its slug.
    async fn get_product_by_slug(
        &self,
        slug: &str,
    ) -> Result<ProductWithCategory, CatalogServiceError>;

    /// Retrieves a single product by UUID.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductRecord, CatalogServiceError>;

    /// Creates a new product. Slugs are unique; the category must exist.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::catalog::seed::seed_catalog;

    use super::*;

    fn service() -> MemCatalogService {
        MemCatalogService::new(Store::new())
    }

    async fn seeded_service() -> Result<MemCatalogService, CatalogServiceError> {
        let store = Store::new();
        seed_catalog(&store).await?;

        Ok(MemCatalogService::new(store))
    }

    fn new_product(name: &str, slug: &str, price: &str) -> TestResult<NewProduct> {
        Ok(NewProduct {
            name: name.to_owned(),
            slug: slug.to_owned(),
            description: None,
            price: price.parse()?,
            category_uuid: None,
            images: Vec::new(),
            sizes: Vec::new(),
            colors: Vec::new(),
            in_stock: true,
            featured: false,
        })
    }

    #[tokio::test]
    async fn list_categories_empty_when_none_created() -> TestResult {
        let categories = service().list_categories().await?;

        assert!(categories.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn seeded_catalog_has_four_categories() -> TestResult {
        let categories = seeded_service().await?.list_categories().await?;

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, ["WOMAN", "MAN", "KIDS", "HOME"]);

        Ok(())
    }

    #[tokio::test]
    async fn get_category_by_slug_returns_category() -> TestResult {
        let category = seeded_service().await?.get_category_by_slug("woman").await?;

        assert_eq!(category.name, "WOMAN");

        Ok(())
    }

    #[tokio::test]
    async fn get_category_unknown_slug_returns_not_found() -> TestResult {
        let result = seeded_service().await?.get_category_by_slug("garden").await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_category_duplicate_slug_returns_already_exists() -> TestResult {
        let service = seeded_service().await?;

        let result = service
            .create_category(NewCategory {
                name: "WOMAN 2".to_owned(),
                slug: "woman".to_owned(),
                description: None,
                image_url: None,
            })
            .await;

        assert!(
            matches!(result, Err(CatalogServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_filters_by_category_slug() -> TestResult {
        let service = seeded_service().await?;

        let products = service
            .list_products(ProductFilter {
                category_slug: Some("man".to_owned()),
                featured: None,
            })
            .await?;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product.name, "LEATHER OXFORD SHOES");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_unknown_category_slug_matches_nothing() -> TestResult {
        let service = seeded_service().await?;

        let products = service
            .list_products(ProductFilter {
                category_slug: Some("garden".to_owned()),
                featured: None,
            })
            .await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_filters_by_featured() -> TestResult {
        let service = seeded_service().await?;

        let featured = service
            .list_products(ProductFilter {
                category_slug: None,
                featured: Some(false),
            })
            .await?;

        assert!(featured.is_empty(), "every seed product is featured");

        Ok(())
    }

    #[tokio::test]
    async fn list_products_joins_category() -> TestResult {
        let service = seeded_service().await?;

        let products = service.list_products(ProductFilter::default()).await?;

        assert_eq!(products.len(), 8);
        assert!(
            products
                .iter()
                .all(|product| product.category.is_some()),
            "every seed product belongs to a category"
        );

        Ok(())
    }

    #[tokio::test]
    async fn search_matches_name_substring_case_insensitively() -> TestResult {
        let service = seeded_service().await?;

        let results = service.search_products("coat").await?;

        let names: Vec<&str> = results.iter().map(|p| p.product.name.as_str()).collect();

        assert_eq!(names, ["WOOL BLEND COAT"]);

        Ok(())
    }

    #[tokio::test]
    async fn search_matches_description() -> TestResult {
        let service = seeded_service().await?;

        let results = service.search_products("uv protection").await?;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].product.slug, "oversized-sunglasses");

        Ok(())
    }

    #[tokio::test]
    async fn get_product_by_slug_returns_product_with_category() -> TestResult {
        let service = seeded_service().await?;

        let product = service.get_product_by_slug("wool-blend-coat").await?;

        assert_eq!(product.product.price, "12990.00".parse::<Decimal>()?);
        assert_eq!(product.product.sizes, ["XS", "S", "M", "L", "XL"]);
        assert_eq!(
            product.category.map(|category| category.slug),
            Some("woman".to_owned())
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_slug_returns_not_found() -> TestResult {
        let result = seeded_service().await?.get_product_by_slug("no-such").await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_slug_returns_already_exists() -> TestResult {
        let service = service();

        service
            .create_product(new_product("SHIRT", "shirt", "10.00")?)
            .await?;

        let result = service
            .create_product(new_product("SHIRT AGAIN", "shirt", "12.00")?)
            .await;

        assert!(
            matches!(result, Err(CatalogServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_unknown_category_returns_invalid_reference() -> TestResult {
        let mut product = new_product("SHIRT", "shirt", "10.00")?;
        product.category_uuid = Some(crate::domain::catalog::models::CategoryUuid::new());

        let result = service().create_product(product).await;

        assert!(
            matches!(result, Err(CatalogServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn created_product_retrievable_by_uuid() -> TestResult {
        let service = service();

        let created = service
            .create_product(new_product("SHIRT", "shirt", "10.00")?)
            .await?;

        let fetched = service.get_product(created.uuid).await?;

        assert_eq!(fetched, created);

        Ok(())
    }
}
