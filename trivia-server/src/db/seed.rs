//! Load the bundled sample data into an empty database

use sqlx::PgPool;

use crate::sample;
use crate::store::StoreResult;

/// Outcome of a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted { categories: usize, questions: usize },
    /// Categories already present; nothing written
    Skipped,
}

/// Insert sample categories and questions when `categories` is empty.
///
/// Runs in one transaction and moves both id sequences past the inserted ids
/// so later inserts do not collide.
pub async fn run(pool: &PgPool) -> StoreResult<SeedOutcome> {
    let mut tx = pool.begin().await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        tracing::info!(existing, "Categories already present, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    let categories = sample::categories();
    for category in &categories {
        sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2)")
            .bind(category.id)
            .bind(&category.kind)
            .execute(&mut *tx)
            .await?;
    }

    let questions = sample::questions();
    for question in &questions {
        sqlx::query(
            r#"
            INSERT INTO questions (id, question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?;
    }

    for table in ["categories", "questions"] {
        sqlx::query(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT MAX(id) FROM {table}))"
        ))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Seeded sample data"
    );

    Ok(SeedOutcome::Inserted {
        categories: categories.len(),
        questions: questions.len(),
    })
}
