//! Quiz round selection
//!
//! A round asks for one question at a time. The client sends the ids it has
//! already seen; the candidate pool is every question not yet asked, optionally
//! restricted to one category, and the next question is drawn uniformly from
//! that pool.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::models::{lenient, Question};

/// Category id meaning "any category"
pub const ANY_CATEGORY: i32 = 0;

/// Category restriction for a quiz round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Only(i32),
}

impl CategoryFilter {
    pub fn from_id(id: i32) -> Self {
        if id == ANY_CATEGORY {
            Self::Any
        } else {
            Self::Only(id)
        }
    }

    /// Category id for SQL binding, `None` when unrestricted.
    pub fn category_id(&self) -> Option<i32> {
        match self {
            Self::Any => None,
            Self::Only(id) => Some(*id),
        }
    }

    pub fn accepts(&self, question: &Question) -> bool {
        match self {
            Self::Any => true,
            Self::Only(id) => question.category == *id,
        }
    }
}

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Category selected for the round; extra fields such as `type` are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i32,
}

impl QuizRequest {
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_id(self.quiz_category.id)
    }
}

/// Questions eligible for the next draw, in input order.
pub fn candidate_pool<'a>(
    questions: &'a [Question],
    filter: CategoryFilter,
    previous: &[i32],
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| filter.accepts(q) && !previous.contains(&q.id))
        .collect()
}

/// Draw one candidate uniformly at random; `None` once the pool is exhausted.
pub fn pick<'a, T, R>(pool: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    pool.choose(rng)
}
