//! Database layer - connection pool, schema and patient stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Schema is created once at startup, before the listener binds
//! - Each insert is a single auto-committed statement - no multi-step transactions

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, initialize};
pub use repos::{MemoryPatientStore, PatientStore, PgPatientStore};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Store unreachable at startup
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// Schema creation statement failed
    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    /// Insert or select failed while serving a request
    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),
}
