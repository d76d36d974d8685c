//! Clear Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{cart::errors::into_status_error, extensions::*, state::State};

/// Clear Cart Handler
///
/// Empties the session's cart.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart emptied"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = req.session_id();

    state
        .app
        .carts
        .clear(&session)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use atelier_app::domain::carts::{MockCartsService, models::SessionId};

    use crate::test_helpers::{TEST_SESSION, carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart").delete(handler))
    }

    #[tokio::test]
    async fn test_clear_returns_204() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_clear()
            .once()
            .withf(|session| session == &SessionId::from(TEST_SESSION))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/api/cart")
            .add_header("x-session-id", TEST_SESSION, true)
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }
}
