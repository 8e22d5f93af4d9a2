//! Storage layer: pool construction, schema preparation, and repositories.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::SqlitePool;

/// Upper bound on pooled connections for file-backed stores.
const MAX_CONNECTIONS: u32 = 5;

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist and foreign key
/// enforcement is switched on for every connection. An in-memory URL gets a
/// single connection that is never recycled, otherwise each new connection
/// would see an empty database.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
    }
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Create the tables if absent and seed the default categories once.
///
/// Returns the number of default categories inserted by this call, which is
/// zero for an already-prepared store.
pub async fn prepare_schema(pool: &DbPool) -> Result<u64, sqlx::Error> {
    schema::create_tables(pool).await?;
    schema::seed_default_categories(pool).await
}

/// Open (creating if needed) the store at `database_url` and prepare it.
pub async fn open_and_prepare(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = create_pool(database_url).await?;
    let seeded = prepare_schema(&pool).await?;
    tracing::debug!(seeded, "Storage prepared");
    Ok(pool)
}
