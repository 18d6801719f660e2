//! Database layer - connection pool, schema, and repositories
//!
//! - Connection pool with an explicit cap
//! - Listing queries return the page and the full count in one round trip
//! - Constraints live in the schema; writes surface violations as errors

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{CategoryRepo, QuestionRepo};
