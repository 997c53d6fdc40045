//! Products Data

use rust_decimal::Decimal;

use crate::domain::products::models::{Product, ProductId};

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

/// Product Update Data
///
/// The identifier travels separately, so this has the same shape as [`NewProduct`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: Decimal,
}

/// Product Read Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRead {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl From<Product> for ProductRead {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name,
            price: product.price,
        }
    }
}
