//! patients-server: HTTP service for patient records
//!
//! Accepts patient records (name, age, diagnosis) over HTTP, stores them in
//! PostgreSQL and lists them back.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use config::{DatabaseConfig, ServerConfig};
pub use error::{Result, ServerError};
pub use http::build_router;
pub use state::AppState;

use db::PgPatientStore;

/// Initialize the database, then serve HTTP until shutdown.
///
/// The listener is only bound once the schema is in place; an unreachable
/// database returns [`db::DbError::Connection`] without serving anything.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let pool = db::initialize(&config.database).await?;
    let state = AppState::new(PgPatientStore::new(pool));

    http::run_server(state, config.bind_addr).await?;
    Ok(())
}
