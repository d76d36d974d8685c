//! Shopping session extraction.

use atelier_app::domain::carts::models::SessionId;
use salvo::prelude::Request;

/// Fallback session for clients that send no `x-session-id` header. Guests
/// all share one cart until the storefront starts minting session ids.
const ANONYMOUS_SESSION: &str = "anonymous";

/// Reads the shopping session from the `x-session-id` request header.
pub(crate) trait SessionExt {
    fn session_id(&self) -> SessionId;
}

impl SessionExt for Request {
    fn session_id(&self) -> SessionId {
        self.header::<String>("x-session-id")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| SessionId::from(ANONYMOUS_SESSION), SessionId::from)
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn echo(req: &mut Request) -> String {
        req.session_id().to_string()
    }

    fn make_service() -> Service {
        Service::new(Router::with_path("session").get(echo))
    }

    #[tokio::test]
    async fn test_missing_header_falls_back_to_anonymous() -> TestResult {
        let mut res = TestClient::get("http://example.com/session")
            .send(&make_service())
            .await;

        assert_eq!(res.take_string().await?, "anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_header_falls_back_to_anonymous() -> TestResult {
        let mut res = TestClient::get("http://example.com/session")
            .add_header("x-session-id", "   ", true)
            .send(&make_service())
            .await;

        assert_eq!(res.take_string().await?, "anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn test_header_value_becomes_the_session() -> TestResult {
        let mut res = TestClient::get("http://example.com/session")
            .add_header("x-session-id", "session-abc", true)
            .send(&make_service())
            .await;

        assert_eq!(res.take_string().await?, "session-abc");

        Ok(())
    }
}
