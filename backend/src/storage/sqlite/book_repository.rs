use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::book::{Book, NewBook};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::BookStorage;

/// Repository for book operations backed by the `books` table
#[derive(Clone)]
pub struct SqliteBookRepository {
    db: DbConnection,
}

impl SqliteBookRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_book(row: &SqliteRow) -> Book {
        Book {
            id: row.get("id"),
            title: row.get("title"),
            author: row.get("author"),
        }
    }
}

#[async_trait]
impl BookStorage for SqliteBookRepository {
    async fn save(&self, book: &NewBook) -> Result<Book> {
        let row = sqlx::query(
            r#"
            INSERT INTO books (title, author)
            VALUES (?, ?)
            RETURNING id, title, author
            "#,
        )
        .bind(book.title())
        .bind(book.author())
        .fetch_one(self.db.pool())
        .await?;

        Ok(Self::row_to_book(&row))
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(Self::row_to_book).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(Self::row_to_book))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn kind(&self) -> &'static str {
        "sqlite"
    }
}
