use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use patients_server::config::{DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT};
use patients_server::{DatabaseConfig, ServerConfig};

/// HTTP service for creating and listing patient records
#[derive(Parser, Debug)]
#[command(name = "patients-server", version, about)]
struct Args {
    /// PostgreSQL connection string
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = patients_server::config::DEFAULT_DATABASE_URL,
        hide_env_values = true
    )]
    database_url: String,

    /// Address to bind to
    #[arg(long, env = "PATIENTS_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PATIENTS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Maximum connections in the database pool
    #[arg(long, env = "PATIENTS_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,

    /// Seconds to wait for a database connection before giving up
    #[arg(long, env = "PATIENTS_ACQUIRE_TIMEOUT_SECS", default_value_t = 30)]
    acquire_timeout_secs: u64,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            database: DatabaseConfig {
                url: self.database_url.clone(),
                max_connections: self.max_connections,
                acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
            },
        }
    }
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.debug).ok();

    let config = args.server_config();
    tracing::info!(
        bind_addr = %config.bind_addr,
        max_connections = config.database.max_connections,
        "starting patients-server"
    );

    patients_server::serve(config)
        .await
        .context("patients-server failed")?;

    Ok(())
}
