//! Product Models

use rust_decimal::Decimal;

/// Database-assigned product identifier.
pub type ProductId = i32;

/// Product Model
///
/// A persisted product always carries a positive `product_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
}
