//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod lenient;
pub mod pagination;
pub mod question;
pub mod validation;

pub use pagination::{paginate, Paginated, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::{Category, NewQuestion, Question, SearchTerm};
pub use validation::ValidationError;
