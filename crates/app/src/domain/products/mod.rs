//! Products

pub mod data;
pub mod errors;
pub mod models;
mod repository;
pub mod service;
mod unit_of_work;

pub use errors::{ProductsRepositoryError, ProductsServiceError};
pub use repository::{MockProductsRepository, PgProductsRepository, ProductsRepository};
pub use service::*;
pub use unit_of_work::{RepositoryFactory, UnitOfWork};
