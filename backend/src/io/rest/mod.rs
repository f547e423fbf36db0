//! # REST API Interface Layer
//!
//! HTTP endpoints for the book service. Handlers only translate between
//! HTTP and the domain: extract, call [`BookService`](crate::domain::BookService),
//! map the result or error to a response.

pub mod book_apis;
pub mod errors;
pub mod mappers;

pub use errors::RestError;
