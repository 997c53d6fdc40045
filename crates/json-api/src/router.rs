//! App Router

use salvo::{Router, Service};

use crate::{error_handling, products};

pub(crate) fn app_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .post(products::create::handler)
        .push(
            Router::with_path("{product_id}")
                .get(products::get::handler)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
}

/// Wrap `router` so unhandled errors leave as JSON.
pub(crate) fn service(router: Router) -> Service {
    Service::new(router).catcher(error_handling::catcher())
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use catalog_app::domain::products::MockProductsService;

    use crate::test_helpers::{make_product, state_with_products};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        service(
            Router::new()
                .hoop(inject(state_with_products(products)))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_products_collection_is_routed() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product(1, "Widget", 999)]));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() -> TestResult {
        let mut res = TestClient::get("http://example.com/widgets")
            .send(&make_service(MockProductsService::new()))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body["statusCode"], json!(404));

        Ok(())
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_json_error() -> TestResult {
        let mut res = TestClient::patch("http://example.com/products/1")
            .send(&make_service(MockProductsService::new()))
            .await;

        let body: Value = res.take_json().await?;
        let status = res.status_code.map(|status| status.as_u16());

        assert!(
            status.is_some_and(|status| (400..500).contains(&status)),
            "expected a client error, got {status:?}"
        );
        assert_eq!(body["statusCode"].as_u64(), status.map(u64::from));

        Ok(())
    }
}
