//! Patient stores
//!
//! Handlers talk to a [`PatientStore`] trait object so the HTTP layer can be
//! exercised against an in-process store as well as PostgreSQL.

pub mod memory;
pub mod patients;

use async_trait::async_trait;

use super::DbError;
use crate::models::{NewPatient, Patient};

pub use memory::MemoryPatientStore;
pub use patients::PgPatientStore;

#[async_trait]
pub trait PatientStore: Send + Sync + 'static {
    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, patient: NewPatient) -> Result<Patient, DbError>;

    /// Every stored record, ascending by id.
    async fn list(&self) -> Result<Vec<Patient>, DbError>;

    /// Cheap round trip proving the store can serve requests.
    async fn ping(&self) -> Result<(), DbError>;
}
