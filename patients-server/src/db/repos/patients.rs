//! PostgreSQL patient repository
//!
//! - insert: single INSERT ... RETURNING (atomic, auto-committed)
//! - list: full table read, ordered by id

use async_trait::async_trait;
use sqlx::PgPool;

use super::PatientStore;
use crate::db::DbError;
use crate::models::{NewPatient, Patient};

/// Patient repository backed by a PgPool
#[derive(Clone)]
pub struct PgPatientStore {
    pool: PgPool,
}

impl PgPatientStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientStore for PgPatientStore {
    async fn insert(&self, patient: NewPatient) -> Result<Patient, DbError> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO patients (name, age, diagnosis)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&patient.name)
        .bind(patient.age)
        .bind(&patient.diagnosis)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "patient inserted");
        Ok(patient.with_id(id))
    }

    async fn list(&self) -> Result<Vec<Patient>, DbError> {
        let patients = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, name, age, diagnosis
            FROM patients
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(patients)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
