//! Get Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    error_handling::ApiError,
    extensions::*,
    products::{
        errors::{Operation, into_api_error},
        responses::ProductResponse,
    },
    state::State,
};

/// Get Product Handler
///
/// Returns a single product.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product_id = req.product_id_or_400()?;

    info!(product_id, "fetching product");

    let product = state
        .app
        .products
        .get_product(product_id)
        .await
        .map_err(|error| into_api_error(Operation::Get(product_id), &error))?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use catalog_app::domain::products::{MockProductsService, ProductsServiceError};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(
            products,
            Router::with_path("products/{product_id}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| *id == 7)
            .return_once(|id| Ok(make_product(id, "Widget", 999)));

        let mut res = TestClient::get("http://example.com/products/7")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({ "productId": 7, "name": "Widget", "price": 9.99 })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products/404")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body, json!({ "message": "Product not found" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_positive_id_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| *id == -1)
            .return_once(|_| {
                Err(ProductsServiceError::InvalidArgument(
                    "Product Id must be greater than 0",
                ))
            });

        let mut res = TestClient::get("http://example.com/products/-1")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body,
            json!({ "message": "Product Id must be greater than 0" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_integer_id_returns_400() {
        let mut products = MockProductsService::new();

        products.expect_get_product().never();

        let res = TestClient::get("http://example.com/products/abc")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_get_inconsistency_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_product().once().return_once(|_| {
            Err(ProductsServiceError::InternalInconsistency(
                "Failed to retrieve created product",
            ))
        });

        let mut res = TestClient::get("http://example.com/products/3")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            body,
            json!({ "message": "An error occurred while retrieving the product" })
        );

        Ok(())
    }
}
