//! Get Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::catalog::models::CategoryRecord;

use crate::{categories::errors::into_status_error, extensions::*, state::State};

/// Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// URL-safe identifier
    pub slug: String,

    /// Optional long-form description
    pub description: Option<String>,

    /// Optional hero image URL
    pub image_url: Option<String>,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            uuid: category.uuid.into(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            image_url: category.image_url,
        }
    }
}

/// Get Category Handler
///
/// Returns a category by its slug.
#[endpoint(tags("categories"), summary = "Get Category")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .app
        .catalog
        .get_category_by_slug(&slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use atelier_app::domain::catalog::{
        CatalogServiceError, MockCatalogService, models::CategoryUuid,
    };

    use crate::test_helpers::{catalog_service, make_category};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("api/categories/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_get_category_returns_200() -> TestResult {
        let uuid = CategoryUuid::new();
        let category = make_category(uuid, "WOMAN", "woman");

        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_category_by_slug()
            .once()
            .withf(|slug| slug == "woman")
            .return_once(move |_| Ok(category));

        let response: CategoryResponse = TestClient::get("http://example.com/api/categories/woman")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.slug, "woman");
        assert_eq!(response.name, "WOMAN");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_slug_returns_404() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_category_by_slug()
            .once()
            .withf(|slug| slug == "missing")
            .return_once(|_| Err(CatalogServiceError::NotFound));

        let res = TestClient::get("http://example.com/api/categories/missing")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
