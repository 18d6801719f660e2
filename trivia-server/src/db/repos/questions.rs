//! Question repository
//!
//! Listings are paged in SQL with LIMIT/OFFSET over `ORDER BY id`, so a page
//! here is the same window `paginate` would cut from the full ordered list.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::{NewQuestion, Paginated, Pagination, Question, SearchTerm};
use crate::quiz::CategoryFilter;
use crate::store::{StoreError, StoreResult};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List questions, optionally restricted to one category.
    pub async fn list(
        &self,
        category: Option<i32>,
        page: Pagination,
    ) -> StoreResult<Paginated<Question>> {
        let rows = sqlx::query(
            r#"
            SELECT
                id, question, answer, category, difficulty,
                COUNT(*) OVER() as total
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        if rows.is_empty() && page.page > 1 {
            // Past the last page the window function has no rows to count
            let (total,): (i64,) = sqlx::query_as(
                "SELECT COUNT(*) FROM questions WHERE ($1::INTEGER IS NULL OR category = $1)",
            )
            .bind(category)
            .fetch_one(self.pool)
            .await?;
            return Ok(empty_page(total, page));
        }

        Ok(into_page(rows, page))
    }

    /// Case-insensitive substring search on question text, every match.
    pub async fn search(&self, term: &SearchTerm) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(term.ilike_pattern())
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn count(&self) -> StoreResult<i64> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;
        Ok(total)
    }

    /// Insert a question. The category foreign key rejects unknown categories.
    pub async fn create(&self, question: NewQuestion) -> StoreResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Delete a question by id, returning the removed row.
    pub async fn delete(&self, id: i32) -> StoreResult<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            DELETE FROM questions
            WHERE id = $1
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| StoreError::not_found("question", id))
    }

    /// Candidate pool for a quiz round, filtered in SQL.
    pub async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(filter.category_id())
        .bind(exclude)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }
}

fn into_page(rows: Vec<PgRow>, page: Pagination) -> Paginated<Question> {
    let total = rows.first().map(|r| r.get::<i64, _>("total")).unwrap_or(0);
    let items = rows
        .into_iter()
        .map(|r| Question {
            id: r.get("id"),
            question: r.get("question"),
            answer: r.get("answer"),
            category: r.get("category"),
            difficulty: r.get("difficulty"),
        })
        .collect();

    Paginated {
        items,
        total,
        page: page.page,
    }
}

fn empty_page(total: i64, page: Pagination) -> Paginated<Question> {
    Paginated {
        items: Vec::new(),
        total,
        page: page.page,
    }
}
