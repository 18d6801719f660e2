//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Listing queries carry `COUNT(*) OVER()` for the total
//! - Deletes use `RETURNING` instead of check-then-delete
//! - Questions are always ordered by id

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;
