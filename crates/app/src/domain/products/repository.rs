//! Products Repository
//!
//! Every call goes through one of the catalog's stored functions, on its own
//! pooled connection, bounded by the configured call deadline.

use std::future::Future;

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as, query_scalar};
use tokio::time::timeout;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsRepositoryError,
        models::{Product, ProductId},
    },
};

const GET_PRODUCT_BY_ID_SQL: &str = include_str!("sql/get_product_by_id.sql");
const GET_ALL_PRODUCTS_SQL: &str = include_str!("sql/get_all_products.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    db: Db,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    async fn within_deadline<T, F>(&self, call: F) -> Result<T, ProductsRepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        let limit = self.db.call_timeout();

        match timeout(limit, call).await {
            Ok(result) => result.map_err(Into::into),
            Err(_elapsed) => Err(ProductsRepositoryError::Timeout(limit)),
        }
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_id: row.try_get("product_id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
        })
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn get_by_id(
        &self,
        product: ProductId,
    ) -> Result<Option<Product>, ProductsRepositoryError> {
        self.within_deadline(async {
            let mut conn = self.db.acquire().await?;

            query_as::<Postgres, Product>(GET_PRODUCT_BY_ID_SQL)
                .bind(product)
                .fetch_optional(&mut *conn)
                .await
        })
        .await
    }

    async fn get_all(&self) -> Result<Vec<Product>, ProductsRepositoryError> {
        self.within_deadline(async {
            let mut conn = self.db.acquire().await?;

            query_as::<Postgres, Product>(GET_ALL_PRODUCTS_SQL)
                .fetch_all(&mut *conn)
                .await
        })
        .await
    }

    async fn create(&self, product: &NewProduct) -> Result<ProductId, ProductsRepositoryError> {
        let created = self
            .within_deadline(async {
                let mut conn = self.db.acquire().await?;

                query_scalar::<Postgres, ProductId>(INSERT_PRODUCT_SQL)
                    .bind(&product.name)
                    .bind(product.price)
                    .fetch_one(&mut *conn)
                    .await
            })
            .await?;

        debug!(product_id = created, "insert_product returned");

        Ok(created)
    }

    async fn update(&self, product: &Product) -> Result<bool, ProductsRepositoryError> {
        let return_value = self
            .within_deadline(async {
                let mut conn = self.db.acquire().await?;

                query_scalar::<Postgres, i32>(UPDATE_PRODUCT_SQL)
                    .bind(product.product_id)
                    .bind(&product.name)
                    .bind(product.price)
                    .fetch_one(&mut *conn)
                    .await
            })
            .await?;

        debug!(product_id = product.product_id, return_value, "update_product returned");

        Ok(return_value > 0)
    }

    async fn delete(&self, product: ProductId) -> Result<bool, ProductsRepositoryError> {
        let return_value = self
            .within_deadline(async {
                let mut conn = self.db.acquire().await?;

                query_scalar::<Postgres, i32>(DELETE_PRODUCT_SQL)
                    .bind(product)
                    .fetch_one(&mut *conn)
                    .await
            })
            .await?;

        debug!(product_id = product, return_value, "delete_product returned");

        Ok(return_value > 0)
    }
}

#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Fetch one product, or `None` when no row matches.
    async fn get_by_id(&self, product: ProductId)
    -> Result<Option<Product>, ProductsRepositoryError>;

    /// Fetch every product in the order the database returns them.
    async fn get_all(&self) -> Result<Vec<Product>, ProductsRepositoryError>;

    /// Insert a product and return its generated identifier.
    async fn create(&self, product: &NewProduct) -> Result<ProductId, ProductsRepositoryError>;

    /// Overwrite name and price; `true` when the procedure reports success.
    async fn update(&self, product: &Product) -> Result<bool, ProductsRepositoryError>;

    /// Remove a product; `true` when the procedure reports success.
    async fn delete(&self, product: ProductId) -> Result<bool, ProductsRepositoryError>;
}
