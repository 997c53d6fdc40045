//! Products Unit of Work

use std::{fmt, sync::Arc};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::domain::products::repository::ProductsRepository;

/// Builds the repository a unit of work hands out.
pub type RepositoryFactory = Arc<dyn Fn() -> Arc<dyn ProductsRepository> + Send + Sync>;

/// Groups the data-access calls of one service operation.
///
/// The repository is built on first access and reused for the rest of the
/// unit's lifetime. Each stored-procedure call is already atomic, so there is
/// no batched transaction to commit.
pub struct UnitOfWork {
    factory: RepositoryFactory,
    products: OnceCell<Arc<dyn ProductsRepository>>,
}

impl UnitOfWork {
    #[must_use]
    pub fn new(factory: RepositoryFactory) -> Self {
        Self {
            factory,
            products: OnceCell::new(),
        }
    }

    pub fn products(&self) -> &dyn ProductsRepository {
        self.products
            .get_or_init(|| {
                debug!("constructing products repository");

                (self.factory)()
            })
            .as_ref()
    }

    /// Number of records committed. Always zero.
    pub fn save_changes(&self) -> u64 {
        0
    }
}

impl fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitOfWork")
            .field("products_initialized", &self.products.get().is_some())
            .finish_non_exhaustive()
    }
}
