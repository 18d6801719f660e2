//! Schema migration command

use anyhow::{Context, Result};
use trivia_server::db::migrations;

use super::DatabaseArgs;

pub async fn run_migrate(args: DatabaseArgs) -> Result<()> {
    let store = args.connect().await?;

    migrations::run(store.pool())
        .await
        .context("Migration failed")?;

    println!("Schema is up to date");
    Ok(())
}
