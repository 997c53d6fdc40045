//! Delete Product Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    error_handling::ApiError,
    extensions::*,
    products::{
        errors::{Operation, into_api_error},
        responses::ProductDeletedResponse,
    },
    state::State,
};

/// Delete Product Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product_id = req.product_id_or_400()?;

    info!(product_id, "deleting product");

    state
        .app
        .products
        .delete_product(product_id)
        .await
        .map_err(|error| into_api_error(Operation::Delete(product_id), &error))?;

    Ok(Json(ProductDeletedResponse::new(product_id)))
}
