//! Postgres-backed store

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreResult, TriviaStore};
use crate::db::{create_pool_with_options, CategoryRepo, QuestionRepo};
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question, SearchTerm};
use crate::quiz::CategoryFilter;

/// Store over a Postgres connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool capped at `max_connections`.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = create_pool_with_options(database_url, max_connections).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn category(&self, id: i32) -> StoreResult<Category> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn questions(
        &self,
        category: Option<i32>,
        page: Pagination,
    ) -> StoreResult<Paginated<Question>> {
        QuestionRepo::new(&self.pool).list(category, page).await
    }

    async fn search_questions(&self, term: &SearchTerm) -> StoreResult<Vec<Question>> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        QuestionRepo::new(&self.pool).count().await
    }

    async fn create_question(&self, question: NewQuestion) -> StoreResult<Question> {
        QuestionRepo::new(&self.pool).create(question).await
    }

    async fn delete_question(&self, id: i32) -> StoreResult<Question> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        QuestionRepo::new(&self.pool)
            .quiz_candidates(filter, exclude)
            .await
    }
}
