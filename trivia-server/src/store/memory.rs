//! In-memory store
//!
//! Mirrors the Postgres schema rules: ids are assigned on insert and never
//! reused, and a question must reference an existing category.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, StoreResult, TriviaStore};
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question, SearchTerm};
use crate::quiz::{candidate_pool, CategoryFilter};
use crate::sample;

#[derive(Debug)]
struct Tables {
    categories: Vec<Category>,
    /// Kept sorted by id
    questions: Vec<Question>,
    /// `None` once the id space is exhausted
    next_question_id: Option<i32>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            questions: Vec::new(),
            next_question_id: Some(1),
        }
    }
}

/// Store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records.
    ///
    /// A question already holding `i32::MAX` leaves no fresh id, so later
    /// inserts fail with `Constraint`.
    pub fn with_data(mut categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        categories.sort_by_key(|c| c.id);
        questions.sort_by_key(|q| q.id);
        let next_question_id = match questions.last() {
            Some(last) => last.id.checked_add(1),
            None => Some(1),
        };

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// Store preloaded with the bundled sample categories and questions.
    pub fn seeded() -> Self {
        Self::with_data(sample::categories(), sample::questions())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn category(&self, id: i32) -> StoreResult<Category> {
        self.tables
            .read()
            .await
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("category", id))
    }

    async fn questions(
        &self,
        category: Option<i32>,
        page: Pagination,
    ) -> StoreResult<Paginated<Question>> {
        let tables = self.tables.read().await;
        let matching: Vec<Question> = tables
            .questions
            .iter()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .cloned()
            .collect();
        Ok(Paginated::from_slice(&matching, page))
    }

    async fn search_questions(&self, term: &SearchTerm) -> StoreResult<Vec<Question>> {
        Ok(self
            .tables
            .read()
            .await
            .questions
            .iter()
            .filter(|q| term.matches(&q.question))
            .cloned()
            .collect())
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        Ok(self.tables.read().await.questions.len() as i64)
    }

    async fn create_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.tables.write().await;

        if !tables.categories.iter().any(|c| c.id == question.category()) {
            return Err(StoreError::Constraint(format!(
                "category {} does not exist",
                question.category()
            )));
        }

        let id = tables
            .next_question_id
            .ok_or_else(|| StoreError::Constraint("question id space exhausted".into()))?
            .max(1);
        tables.next_question_id = id.checked_add(1);
        let question = question.into_question(id);
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<Question> {
        let mut tables = self.tables.write().await;
        let index = tables
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| StoreError::not_found("question", id))?;
        Ok(tables.questions.remove(index))
    }

    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(candidate_pool(&tables.questions, filter, exclude)
            .into_iter()
            .cloned()
            .collect())
    }
}
