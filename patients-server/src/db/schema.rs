//! Schema for the patients table

use sqlx::PgPool;

use super::DbError;

/// Ensure the `patients` table exists.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring patients schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS patients (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            diagnosis TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(DbError::Schema)?;

    tracing::info!("Patients schema ready");
    Ok(())
}
