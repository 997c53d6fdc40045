//! Test context for repository and service integration tests.

use std::time::Duration;

use crate::{
    database::Db,
    domain::products::{PgProductsRepository, PgProductsService},
};

use super::db::TestDb;

const CALL_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestContext {
    pub db: TestDb,
    pub repository: PgProductsRepository,
    pub products: PgProductsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;
        let handle = Db::new(db.pool().clone(), CALL_TIMEOUT);

        Self {
            repository: PgProductsRepository::new(handle.clone()),
            products: PgProductsService::new(handle),
            db,
        }
    }
}
