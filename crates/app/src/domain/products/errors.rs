//! Products repository and service errors.

use std::time::Duration;

use thiserror::Error;

/// Raw data-access failures. These are never classified further by the repository.
#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),

    #[error("database call exceeded {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// The caller supplied an unusable value, e.g. a non-positive identifier.
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("Product not found")]
    NotFound,

    /// A write reported success but could not be confirmed, or reported failure.
    #[error("{0}")]
    InternalInconsistency(&'static str),

    #[error("repository failure")]
    Repository(#[from] ProductsRepositoryError),
}
