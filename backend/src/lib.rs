//! # Book Service Backend
//!
//! A small CRUD service over book records, organised in layers:
//!
//! ```text
//! IO Layer      (REST handlers, error translation)
//!     ↓
//! Domain Layer  (BookService, validation)
//!     ↓
//! Storage Layer (BookStorage: SQLite or in-memory)
//! ```
//!
//! The storage backend is chosen once at startup and handed to the service
//! explicitly; nothing is looked up globally.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::domain::BookService;
use crate::storage::{BookStorage, DbConnection, InMemoryBookRepository, SqliteBookRepository};

/// Main application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub book_service: BookService,
}

/// Open the configured store and build the services on top of it
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    let storage: Arc<dyn BookStorage> = if config.uses_memory_store() {
        info!("Using in-memory book store; data will not survive a restart");
        Arc::new(InMemoryBookRepository::new())
    } else {
        info!("Setting up database at {}", config.database_url);
        let db = DbConnection::new(&config.database_url).await?;
        Arc::new(SqliteBookRepository::new(db))
    };

    info!("Setting up domain model");
    let book_service = BookService::new(storage);

    Ok(AppState { book_service })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, static_dir: Option<&Path>) -> Router {
    // The browser frontend may be served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let mut router = Router::new().merge(io::rest::book_apis::router());

    if let Some(dir) = static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
