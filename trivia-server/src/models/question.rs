//! Question and category records, plus validated question input

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for question and answer text
const MAX_TEXT_LEN: usize = 1000;

/// Maximum length for a search term
const MAX_SEARCH_LEN: usize = 256;

/// Allowed difficulty range (inclusive)
const MIN_DIFFICULTY: i32 = 1;
const MAX_DIFFICULTY: i32 = 5;

/// Runs of whitespace, including newlines pasted into the form
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Question record, serialized in its public format
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Validated input for a question insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate and normalize a question submission.
    ///
    /// # Rules
    /// - Question and answer are trimmed, inner whitespace collapsed
    /// - Neither may be empty or longer than 1000 characters
    /// - Category must be a positive id
    /// - Difficulty must be within 1..=5
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::NewQuestion;
    ///
    /// assert!(NewQuestion::new("Capital of Peru?", "Lima", 3, 2).is_ok());
    /// assert!(NewQuestion::new("  ", "Lima", 3, 2).is_err());
    /// assert!(NewQuestion::new("Capital of Peru?", "Lima", 3, 9).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = normalize_text("question", question)?;
        let answer = normalize_text("answer", answer)?;

        if category < 1 {
            return Err(ValidationError::OutOfRange {
                field: "category",
                min: 1,
                max: i32::MAX,
                value: category,
            });
        }

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
                value: difficulty,
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i32 {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach a store-assigned id.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn normalize_text(field: &'static str, s: &str) -> Result<String, ValidationError> {
    let text = WHITESPACE_RE.replace_all(s.trim(), " ").into_owned();

    if text.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if text.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(text)
}

/// Case-insensitive substring search over question text.
///
/// The term is used exactly as sent, surrounding whitespace included. An
/// empty term matches every question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_SEARCH_LEN {
            return Err(ValidationError::TooLong {
                field: "searchTerm",
                max: MAX_SEARCH_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pattern for `ILIKE ... ESCAPE '\'`, with wildcards in the term
    /// matched literally.
    pub fn ilike_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// In-memory equivalent of the ILIKE match.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }
}
