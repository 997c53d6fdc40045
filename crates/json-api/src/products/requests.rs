//! Product request bodies and their field validation.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use catalog_app::domain::products::data::{NewProduct, ProductUpdate};

const NAME_REQUIRED: &str = "Product name is required";
const PRICE_OUT_OF_RANGE: &str = "Price must be greater than 0";

const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
const MAX_PRICE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);

    error.message = Some(Cow::Borrowed(message));

    error
}

fn not_blank(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(validation_error("required", NAME_REQUIRED));
    }

    Ok(())
}

fn price_in_range(price: &Decimal) -> Result<(), ValidationError> {
    if *price < MIN_PRICE || *price > MAX_PRICE {
        return Err(validation_error("range", PRICE_OUT_OF_RANGE));
    }

    Ok(())
}

/// Create Product Request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    #[serde(default, alias = "Name")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Product name must not exceed 100 characters")
    )]
    pub name: String,

    /// A missing price is treated as zero and rejected.
    #[serde(default, alias = "Price", with = "rust_decimal::serde::float")]
    #[validate(custom(function = "price_in_range"))]
    pub price: Decimal,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            price: request.price,
        }
    }
}

/// Update Product Request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    #[serde(default, alias = "Name")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Product name must not exceed 100 characters")
    )]
    pub name: String,

    #[serde(default, alias = "Price", with = "rust_decimal::serde::float")]
    #[validate(custom(function = "price_in_range"))]
    pub price: Decimal,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            price: request.price,
        }
    }
}
