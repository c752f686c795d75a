//! In-process patient store (for testing)
//!
//! Assigns ids the way a SERIAL column does: starting at 1, never reused.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::PatientStore;
use crate::db::DbError;
use crate::models::{NewPatient, Patient};

#[derive(Clone, Default)]
pub struct MemoryPatientStore {
    patients: Arc<RwLock<Vec<Patient>>>,
}

impl MemoryPatientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientStore for MemoryPatientStore {
    async fn insert(&self, patient: NewPatient) -> Result<Patient, DbError> {
        let mut patients = self.patients.write().await;
        let id = patients.last().map_or(1, |p| p.id + 1);
        let patient = patient.with_id(id);
        patients.push(patient.clone());
        Ok(patient)
    }

    async fn list(&self) -> Result<Vec<Patient>, DbError> {
        Ok(self.patients.read().await.clone())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
