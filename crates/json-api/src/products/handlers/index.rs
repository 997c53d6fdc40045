//! Product Index Handler

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

/// Product Index Handler
///
/// Returns every product, ordered by id.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    info!("fetching all products");

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(|error| into_api_error(Operation::List, &error))?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
