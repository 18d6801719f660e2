//! trivia-server: HTTP API for the trivia game
//!
//! Serves categories, paginated question listings, question create/delete/search,
//! and random quiz draws over a pluggable [`store::TriviaStore`].

pub mod db;
pub mod http;
pub mod models;
pub mod quiz;
pub mod sample;
pub mod store;

pub use http::{build_router, parse_origins, run_server, AppState, ServerConfig};
pub use store::{MemoryStore, PgStore, StoreError, TriviaStore};
