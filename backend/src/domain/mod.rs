//! # Domain Module
//!
//! Book records and the service that validates and routes them to storage.
//! The domain layer knows nothing about HTTP; it depends only on the
//! [`BookStorage`](crate::storage::BookStorage) trait.

pub mod book_service;
pub mod models;

pub use book_service::{BookService, BookServiceError, DELETE_CONFIRMATION};
