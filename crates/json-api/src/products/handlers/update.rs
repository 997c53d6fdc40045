//! Update Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    error_handling::ApiError,
    extensions::*,
    products::{
        errors::{Operation, into_api_error},
        requests::UpdateProductRequest,
        responses::ProductResponse,
    },
    state::State,
};

/// Update Product Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product_id = req.product_id_or_400()?;
    let request = req.validated_json::<UpdateProductRequest>().await?;

    info!(product_id, "updating product");

    let product = state
        .app
        .products
        .update_product(product_id, request.into())
        .await
        .map_err(|error| into_api_error(Operation::Update(product_id), &error))?;

    Ok(Json(product.into()))
}
