use std::sync::Arc;

use shared::CreateBookRequest;
use tracing::{error, info, warn};

use crate::domain::models::book::{Book, BookValidationError, NewBook};
use crate::storage::BookStorage;

/// Message returned by a delete, whether or not the id existed
pub const DELETE_CONFIRMATION: &str = "Book deleted successfully!";

#[derive(Debug, thiserror::Error)]
pub enum BookServiceError {
    #[error(transparent)]
    Validation(#[from] BookValidationError),
    #[error("Book not found with id: {0}")]
    NotFound(i64),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Service for managing books
#[derive(Clone)]
pub struct BookService {
    storage: Arc<dyn BookStorage>,
}

impl BookService {
    pub fn new(storage: Arc<dyn BookStorage>) -> Self {
        Self { storage }
    }

    /// List every stored book
    pub async fn list_books(&self) -> Result<Vec<Book>, BookServiceError> {
        info!("Listing all books");

        let books = self.storage.find_all().await.map_err(log_storage_error)?;

        info!("Found {} books", books.len());
        Ok(books)
    }

    /// Validate and store a new book
    pub async fn create_book(&self, request: CreateBookRequest) -> Result<Book, BookServiceError> {
        info!("Adding new book: title={:?}, author={:?}", request.title, request.author);

        let new_book = NewBook::new(&request.title, &request.author).map_err(|e| {
            warn!("Rejected book: {}", e);
            e
        })?;

        let book = self.storage.save(&new_book).await.map_err(log_storage_error)?;

        info!("Book saved with ID: {}", book.id);
        Ok(book)
    }

    /// Get a book by id
    pub async fn get_book(&self, id: i64) -> Result<Book, BookServiceError> {
        info!("Looking for book with ID: {}", id);

        match self.storage.find_by_id(id).await.map_err(log_storage_error)? {
            Some(book) => Ok(book),
            None => {
                warn!("Book not found: {}", id);
                Err(BookServiceError::NotFound(id))
            }
        }
    }

    /// Delete a book by id
    ///
    /// Deleting an id that does not exist succeeds; the miss is only logged.
    pub async fn delete_book(&self, id: i64) -> Result<&'static str, BookServiceError> {
        info!("Deleting book with ID: {}", id);

        let deleted = self.storage.delete_by_id(id).await.map_err(log_storage_error)?;

        if deleted {
            info!("Deleted book: {}", id);
        } else {
            warn!("Delete requested for missing book: {}", id);
        }

        Ok(DELETE_CONFIRMATION)
    }

    pub fn storage_kind(&self) -> &'static str {
        self.storage.kind()
    }
}

fn log_storage_error(e: anyhow::Error) -> BookServiceError {
    error!("Storage failure: {:?}", e);
    BookServiceError::Storage(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DbConnection, InMemoryBookRepository, SqliteBookRepository};
    use anyhow::anyhow;
    use async_trait::async_trait;

    fn create_test_service() -> BookService {
        BookService::new(Arc::new(InMemoryBookRepository::new()))
    }

    fn request(title: &str, author: &str) -> CreateBookRequest {
        CreateBookRequest {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    /// Store whose every call fails, for exercising the error path
    struct BrokenStorage;

    #[async_trait]
    impl BookStorage for BrokenStorage {
        async fn save(&self, _book: &NewBook) -> anyhow::Result<Book> {
            Err(anyhow!("disk on fire"))
        }
        async fn find_all(&self) -> anyhow::Result<Vec<Book>> {
            Err(anyhow!("disk on fire"))
        }
        async fn find_by_id(&self, _id: i64) -> anyhow::Result<Option<Book>> {
            Err(anyhow!("disk on fire"))
        }
        async fn delete_by_id(&self, _id: i64) -> anyhow::Result<bool> {
            Err(anyhow!("disk on fire"))
        }
        fn kind(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let service = create_test_service();

        let created = service.create_book(request("Dune", "Herbert")).await.unwrap();
        let fetched = service.get_book(created.id).await.unwrap();

        assert_eq!(fetched.title, "Dune");
        assert_eq!(fetched.author, "Herbert");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_contains_all_created() {
        let service = create_test_service();
        assert!(service.list_books().await.unwrap().is_empty());

        let mut created = Vec::new();
        for i in 0..5 {
            created.push(
                service
                    .create_book(request(&format!("Title {}", i), "Author"))
                    .await
                    .unwrap(),
            );
        }

        let listed = service.list_books().await.unwrap();
        assert!(listed.len() >= created.len());
        for book in &created {
            assert!(listed.contains(book));
        }
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = create_test_service();

        let result = service.get_book(42).await;
        assert!(matches!(result, Err(BookServiceError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = create_test_service();
        let created = service.create_book(request("Dune", "Herbert")).await.unwrap();

        let message = service.delete_book(created.id).await.unwrap();
        assert_eq!(message, DELETE_CONFIRMATION);

        let result = service.get_book(created.id).await;
        assert!(matches!(result, Err(BookServiceError::NotFound(id)) if id == created.id));
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let service = create_test_service();

        let message = service.delete_book(7).await.unwrap();
        assert_eq!(message, DELETE_CONFIRMATION);
    }

    #[tokio::test]
    async fn test_create_with_empty_field_persists_nothing() {
        let service = create_test_service();

        for (title, author) in [("", "Herbert"), ("Dune", ""), ("", "")] {
            let result = service.create_book(request(title, author)).await;
            assert!(matches!(result, Err(BookServiceError::Validation(_))));
        }

        assert!(service.list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get_keeps_whitespace_exactly() {
        let service = create_test_service();

        for (title, author) in [(" Dune ", "Herbert"), ("   ", "\tAusten\n")] {
            let created = service.create_book(request(title, author)).await.unwrap();
            let fetched = service.get_book(created.id).await.unwrap();

            assert_eq!(fetched.title, title);
            assert_eq!(fetched.author, author);
        }
    }

    #[tokio::test]
    async fn test_storage_failures_propagate() {
        let service = BookService::new(Arc::new(BrokenStorage));

        assert!(matches!(service.list_books().await, Err(BookServiceError::Storage(_))));
        assert!(matches!(
            service.create_book(request("Dune", "Herbert")).await,
            Err(BookServiceError::Storage(_))
        ));
        assert!(matches!(service.get_book(1).await, Err(BookServiceError::Storage(_))));
        assert!(matches!(service.delete_book(1).await, Err(BookServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn test_validation_runs_before_storage() {
        let service = BookService::new(Arc::new(BrokenStorage));

        let result = service.create_book(request("", "Herbert")).await;
        assert!(matches!(result, Err(BookServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_sqlite_backed_service() {
        let db = DbConnection::init_test().await.unwrap();
        let service = BookService::new(Arc::new(SqliteBookRepository::new(db)));

        let created = service.create_book(request("Dune", "Herbert")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(service.list_books().await.unwrap(), vec![created.clone()]);
        assert_eq!(service.storage_kind(), "sqlite");
    }
}
