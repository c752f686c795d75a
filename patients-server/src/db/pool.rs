//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{schema, DbError};
use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly, so an unreachable database surfaces here as
/// [`DbError::Connection`] rather than on the first request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
        .map_err(DbError::Connection)
}

/// Connect and make sure the `patients` table exists.
///
/// Returns the ready pool. Safe to call more than once: schema creation is a
/// no-op when the table is already there and never touches stored rows.
///
/// # Example
///
/// ```ignore
/// let pool = initialize(&DatabaseConfig::new("postgres://localhost/patient_db")).await?;
/// let store = PgPatientStore::new(pool);
/// ```
pub async fn initialize(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let pool = create_pool(config).await?;
    schema::ensure_schema(&pool).await?;
    Ok(pool)
}
