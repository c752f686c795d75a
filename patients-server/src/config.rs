//! Process configuration
//!
//! Read once at startup. The binary fills these from flags and environment;
//! library users and tests construct them directly.

use std::net::SocketAddr;
use std::time::Duration;

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "postgresql://postgres:postgres@db:5432/patient_db";

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long to wait for a pool connection (sqlx's own default).
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string (host, port, credentials, database name)
    pub url: String,
    pub max_connections: u32,
    /// Also bounds how long startup retries an unreachable host
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
        )
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            database: DatabaseConfig::default(),
        }
    }
}
