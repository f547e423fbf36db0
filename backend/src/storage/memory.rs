//! In-memory [`BookStorage`] used by tests and by `--database-url memory`.
//! Nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::book::{Book, NewBook};
use crate::storage::traits::BookStorage;

#[derive(Default)]
struct Inner {
    books: BTreeMap<i64, Book>,
    last_id: i64,
}

/// Process-local book store
#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStorage for InMemoryBookRepository {
    async fn save(&self, book: &NewBook) -> Result<Book> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let stored = Book {
            id: inner.last_id,
            title: book.title().to_string(),
            author: book.author().to_string(),
        };
        inner.books.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let inner = self.inner.read().await;
        Ok(inner.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>> {
        let inner = self.inner.read().await;
        Ok(inner.books.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.books.remove(&id).is_some())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
