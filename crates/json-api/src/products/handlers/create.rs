//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use crate::{
    error_handling::ApiError,
    extensions::*,
    products::{
        errors::{Operation, into_api_error},
        requests::CreateProductRequest,
        responses::ProductResponse,
    },
    state::State,
};

/// Create Product Handler
///
/// Responds with `201 Created`, the stored product and its location.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = req.validated_json::<CreateProductRequest>().await?;

    info!(name = %request.name, "creating product");

    let product = state
        .app
        .products
        .create_product(request.into())
        .await
        .map_err(|error| into_api_error(Operation::Create, &error))?;

    res.add_header(LOCATION, format!("/products/{}", product.product_id), true)
        .or_500(
            "failed to set location header",
            Operation::Create.failure_message(),
        )?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
