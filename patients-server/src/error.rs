//! Error types for patients-server startup

use thiserror::Error;

use crate::db::DbError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Database(#[from] DbError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
