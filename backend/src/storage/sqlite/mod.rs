//! # SQLite Storage Module
//!
//! - **connection.rs** - pool creation and schema setup
//! - **book_repository.rs** - [`BookStorage`](crate::storage::BookStorage) over the `books` table

pub mod book_repository;
pub mod connection;

pub use book_repository::SqliteBookRepository;
pub use connection::DbConnection;
