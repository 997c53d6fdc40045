//! Product response bodies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::{data::ProductRead, models::ProductId};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub product_id: ProductId,

    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<ProductRead> for ProductResponse {
    fn from(product: ProductRead) -> Self {
        ProductResponse {
            product_id: product.product_id,
            name: product.name,
            price: product.price,
        }
    }
}

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDeletedResponse {
    pub message: String,

    pub product_id: ProductId,
}

impl ProductDeletedResponse {
    pub(crate) fn new(product_id: ProductId) -> Self {
        Self {
            message: "Product deleted successfully".to_string(),
            product_id,
        }
    }
}
