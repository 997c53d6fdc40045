//! Products service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductRead, ProductUpdate},
        errors::ProductsServiceError,
        models::{Product, ProductId},
        repository::{PgProductsRepository, ProductsRepository},
        unit_of_work::{RepositoryFactory, UnitOfWork},
    },
};

const INVALID_PRODUCT_ID: &str = "Product Id must be greater than 0";

#[derive(Clone)]
pub struct PgProductsService {
    repositories: RepositoryFactory,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self::with_repository_factory(Arc::new(move || -> Arc<dyn ProductsRepository> {
            Arc::new(PgProductsRepository::new(db.clone()))
        }))
    }

    #[must_use]
    pub fn with_repository_factory(repositories: RepositoryFactory) -> Self {
        Self { repositories }
    }

    fn unit_of_work(&self) -> UnitOfWork {
        UnitOfWork::new(Arc::clone(&self.repositories))
    }
}

impl fmt::Debug for PgProductsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgProductsService").finish_non_exhaustive()
    }
}

fn ensure_valid_id(product: ProductId) -> Result<(), ProductsServiceError> {
    if product <= 0 {
        return Err(ProductsServiceError::InvalidArgument(INVALID_PRODUCT_ID));
    }

    Ok(())
}

async fn find_existing(
    uow: &UnitOfWork,
    product: ProductId,
) -> Result<Product, ProductsServiceError> {
    uow.products()
        .get_by_id(product)
        .await?
        .ok_or(ProductsServiceError::NotFound)
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRead>, ProductsServiceError> {
        let uow = self.unit_of_work();

        let products = uow.products().get_all().await?;

        Ok(products.into_iter().map(Into::into).collect())
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRead, ProductsServiceError> {
        ensure_valid_id(product)?;

        let uow = self.unit_of_work();

        Ok(find_existing(&uow, product).await?.into())
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRead, ProductsServiceError> {
        let uow = self.unit_of_work();

        let product = NewProduct {
            name: product.name.trim().to_string(),
            price: product.price,
        };

        let product_id = uow.products().create(&product).await?;

        if product_id <= 0 {
            return Err(ProductsServiceError::InternalInconsistency(
                "Failed to create product",
            ));
        }

        debug!(product_id, committed = uow.save_changes(), "created product");

        let created = uow.products().get_by_id(product_id).await?.ok_or(
            ProductsServiceError::InternalInconsistency("Failed to retrieve created product"),
        )?;

        Ok(created.into())
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRead, ProductsServiceError> {
        ensure_valid_id(product)?;

        let uow = self.unit_of_work();

        find_existing(&uow, product).await?;

        let updated = uow
            .products()
            .update(&Product {
                product_id: product,
                name: update.name.trim().to_string(),
                price: update.price,
            })
            .await?;

        if !updated {
            return Err(ProductsServiceError::InternalInconsistency(
                "Failed to update product",
            ));
        }

        debug!(product_id = product, committed = uow.save_changes(), "updated product");

        let updated = uow.products().get_by_id(product).await?.ok_or(
            ProductsServiceError::InternalInconsistency("Failed to retrieve updated product"),
        )?;

        Ok(updated.into())
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        ensure_valid_id(product)?;

        let uow = self.unit_of_work();

        find_existing(&uow, product).await?;

        if !uow.products().delete(product).await? {
            return Err(ProductsServiceError::InternalInconsistency(
                "Failed to delete product",
            ));
        }

        debug!(product_id = product, committed = uow.save_changes(), "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRead>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRead, ProductsServiceError>;

    /// Creates a product and returns it as stored.
    async fn create_product(&self, product: NewProduct)
    -> Result<ProductRead, ProductsServiceError>;

    /// Replaces the name and price of an existing product and returns it as stored.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRead, ProductsServiceError>;

    /// Deletes an existing product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
