//! Sample data command

use anyhow::{Context, Result};
use trivia_server::db::migrations;
use trivia_server::db::seed::{self, SeedOutcome};

use super::DatabaseArgs;

pub async fn run_seed(args: DatabaseArgs) -> Result<()> {
    let store = args.connect().await?;

    migrations::run(store.pool())
        .await
        .context("Migration failed")?;

    match seed::run(store.pool()).await.context("Seeding failed")? {
        SeedOutcome::Inserted {
            categories,
            questions,
        } => println!("Inserted {} categories and {} questions", categories, questions),
        SeedOutcome::Skipped => println!("Categories already present, nothing seeded"),
    }

    Ok(())
}
