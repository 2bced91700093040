//! blogd - blog content API server
//!
//! Opens (or creates) the SQLite database, runs the schema migrations, and
//! serves the JSON API until Ctrl+C or SIGTERM.
//!
//! Usage:
//!   blogd                              # 127.0.0.1:3030, ./blog.db
//!   blogd -b 0.0.0.0:8080 --database /var/lib/blogd/blog.db
//!   RUST_LOG=blogd_server=debug blogd  # Fine-grained log control

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use blogd_server::db::create_pool;
use blogd_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "blogd",
    author,
    version,
    about = "HTTP backend for nested blog documents, backed by SQLite"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// Path to the SQLite database file (created if missing)
    #[arg(long, env = "BLOGD_DATABASE", default_value = "blog.db")]
    database: PathBuf,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing with console output
fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    tracing::info!("Starting blogd on {}", cli.bind);

    let pool = create_pool(&cli.database)
        .await
        .with_context(|| format!("Failed to open database {}", cli.database.display()))?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
