//! Shared application domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;

pub use domain::products;

#[cfg(test)]
mod test;
