//! Store abstraction injected into request handlers
//!
//! Handlers only see [`TriviaStore`]. Production uses [`PgStore`]; tests and
//! `serve --memory` use [`MemoryStore`]. Both order questions by id and page
//! listings identically, reporting the full match count as `total`. Search is
//! not paged.

pub mod error;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Paginated, Pagination, Question, SearchTerm};
use crate::quiz::CategoryFilter;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    /// A single category, or `NotFound`.
    async fn category(&self, id: i32) -> StoreResult<Category>;

    /// One page of questions, optionally restricted to a category.
    async fn questions(
        &self,
        category: Option<i32>,
        page: Pagination,
    ) -> StoreResult<Paginated<Question>>;

    /// Every question whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &SearchTerm) -> StoreResult<Vec<Question>>;

    async fn count_questions(&self) -> StoreResult<i64>;

    /// Insert a question; an unknown category is a `Constraint` error.
    async fn create_question(&self, question: NewQuestion) -> StoreResult<Question>;

    /// Delete a question, returning the removed record.
    async fn delete_question(&self, id: i32) -> StoreResult<Question>;

    /// Every question matching `filter` whose id is not in `exclude`.
    async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>>;
}
