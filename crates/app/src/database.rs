//! Database connection management

use std::time::Duration;

use sqlx::{
    PgPool, Postgres,
    pool::PoolConnection,
    postgres::PgPoolOptions,
};

/// Connection settings resolved at startup.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub call_timeout: Duration,
}

/// Shared handle to the connection pool plus the per-call deadline.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
    call_timeout: Duration,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool, call_timeout: Duration) -> Self {
        Self { pool, call_timeout }
    }

    /// Check out a connection for a single call.
    ///
    /// The connection goes back to the pool when the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.pool.acquire().await
    }

    /// Deadline applied to every database call.
    #[must_use]
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.call_timeout)
        .connect(&settings.url)
        .await
}
