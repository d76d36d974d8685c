//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    categories::get::CategoryResponse, categories::errors::into_status_error, extensions::*,
    state::State,
};

/// Category Index Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// The list of categories, oldest first
    pub categories: Vec<CategoryResponse>,
}

/// Category Index Handler
///
/// Returns all categories.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .catalog
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use atelier_app::domain::catalog::{MockCatalogService, models::CategoryUuid};

    use crate::test_helpers::{catalog_service, make_category};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("api/categories").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_categories_in_insertion_order() -> TestResult {
        let woman = CategoryUuid::new();
        let man = CategoryUuid::new();

        let mut catalog = MockCatalogService::new();

        catalog.expect_list_categories().once().return_once(move || {
            Ok(vec![
                make_category(woman, "WOMAN", "woman"),
                make_category(man, "MAN", "man"),
            ])
        });

        let response: CategoriesResponse = TestClient::get("http://example.com/api/categories")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert_eq!(response.categories.len(), 2, "expected two categories");
        assert_eq!(response.categories[0].slug, "woman");
        assert_eq!(response.categories[1].slug, "man");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_categories()
            .once()
            .return_once(|| Ok(vec![]));

        let response: CategoriesResponse = TestClient::get("http://example.com/api/categories")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert!(response.categories.is_empty());

        Ok(())
    }
}
