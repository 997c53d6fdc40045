//! Test helpers.

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{MockProductsService, data::ProductRead, models::ProductId},
};

use crate::{router, state::State};

pub(crate) fn make_product(product_id: ProductId, name: &str, cents: i64) -> ProductRead {
    ProductRead {
        product_id,
        name: name.to_string(),
        price: Decimal::new(cents, 2),
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    router::service(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
