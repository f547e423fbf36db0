//! # Storage Traits
//!
//! The persistence contract the domain layer depends on. Any store keyed by
//! an integer id can back the service by implementing [`BookStorage`].

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::book::{Book, NewBook};

/// Trait defining the interface for book storage operations
#[async_trait]
pub trait BookStorage: Send + Sync {
    /// Persist a new book and return it with its store-assigned id
    async fn save(&self, book: &NewBook) -> Result<Book>;

    /// List every stored book ordered by id
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// Retrieve a specific book by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>>;

    /// Delete a book by id
    /// Returns true if a book was found and deleted, false otherwise
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Short human-readable name of the backend, used in startup logs
    fn kind(&self) -> &'static str;
}
