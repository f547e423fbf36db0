//! # Storage Module
//!
//! Handles all data persistence for the book service.
//!
//! The domain layer only sees the [`BookStorage`] trait. Two adapters exist:
//!
//! - **sqlite/** - durable storage through an sqlx connection pool
//! - **memory.rs** - process-local map, used for tests and `--database-url memory`

pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::InMemoryBookRepository;
pub use sqlite::{DbConnection, SqliteBookRepository};
pub use traits::BookStorage;
