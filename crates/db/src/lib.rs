//! Data access for the dispatch request store.
//!
//! Pool creation, embedded migrations, the seed/writer repositories, and
//! the read-side [`RequestQueries`] contract with its PostgreSQL
//! implementation.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod repositories;

pub use error::DbError;
pub use queries::{PgRequestQueries, RequestQueries};

pub type DbPool = sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Drop every dispatch table and re-apply migrations from scratch.
///
/// Destructive. Intended for the test harness and local bootstrap only;
/// must never be reachable from an end-user request path.
pub async fn reset_schema(pool: &DbPool) -> Result<(), DbError> {
    tracing::warn!("resetting schema: dropping all dispatch tables");
    sqlx::query("DROP TABLE IF EXISTS requests, clients, areas, _sqlx_migrations CASCADE")
        .execute(pool)
        .await?;
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DbError::Database(e.into()))?;
    Ok(())
}
