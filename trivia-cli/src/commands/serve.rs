//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::migrations;
use trivia_server::{parse_origins, run_server, AppState, MemoryStore, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allowed CORS origin, e.g. http://localhost:3000 (repeatable); any origin when omitted
    #[arg(long = "allow-origin", env = "TRIVIA_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Serve bundled sample data from memory; database settings are ignored
    #[arg(long)]
    pub memory: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Checked before connecting so a typo fails fast
    let allowed_origins = parse_origins(&args.allowed_origins)?;

    let state = if args.memory {
        tracing::warn!("Serving in-memory sample data; changes are lost on exit");
        AppState::new(MemoryStore::seeded())
    } else {
        let store = args.database.connect().await?;
        migrations::run(store.pool())
            .await
            .context("Migration failed")?;
        AppState::new(store)
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        allowed_origins,
    };

    tracing::info!("Starting trivia server on {}", config.bind_addr);

    run_server(state, config).await.context("Server error")?;

    Ok(())
}
