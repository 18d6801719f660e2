//! Store error type

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a [`TriviaStore`](super::TriviaStore)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A write violated a store constraint (e.g. unknown category)
    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl StoreError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_foreign_key_violation() || db.is_check_violation() {
                return Self::Constraint(db.message().to_owned());
            }
        }
        Self::Sqlx(e)
    }
}
