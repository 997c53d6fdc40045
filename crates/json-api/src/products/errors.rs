//! Product Errors

use tracing::{error, warn};

use catalog_app::domain::products::{ProductsServiceError, models::ProductId};

use crate::error_handling::ApiError;

/// The product operation a handler was performing when it failed.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Operation {
    List,
    Get(ProductId),
    Create,
    Update(ProductId),
    Delete(ProductId),
}

impl Operation {
    pub(crate) fn failure_message(self) -> &'static str {
        match self {
            Self::List => "An error occurred while retrieving products",
            Self::Get(_) => "An error occurred while retrieving the product",
            Self::Create => "An error occurred while creating the product",
            Self::Update(_) => "An error occurred while updating the product",
            Self::Delete(_) => "An error occurred while deleting the product",
        }
    }

    fn product_id(self) -> Option<ProductId> {
        match self {
            Self::Get(id) | Self::Update(id) | Self::Delete(id) => Some(id),
            Self::List | Self::Create => None,
        }
    }
}

/// Classify a service failure into the response for `operation`.
pub(crate) fn into_api_error(operation: Operation, error: &ProductsServiceError) -> ApiError {
    let product_id = operation.product_id();

    match error {
        ProductsServiceError::NotFound => {
            warn!(?product_id, "product not found");

            ApiError::not_found(error.to_string())
        }
        ProductsServiceError::InvalidArgument(message) => {
            warn!(?product_id, "invalid input: {message}");

            ApiError::bad_request(*message)
        }
        ProductsServiceError::InternalInconsistency(_) | ProductsServiceError::Repository(_) => {
            error!(?operation, "product operation failed: {error}");

            ApiError::internal(operation.failure_message())
        }
    }
}
