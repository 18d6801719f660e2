//! Subcommand implementations

pub mod migrate;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::PgStore;

/// Database connection arguments
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides .env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn require_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }

    /// Connect to Postgres with the configured pool size.
    pub async fn connect(&self) -> Result<PgStore> {
        let url = self.require_url()?;
        PgStore::connect(url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
