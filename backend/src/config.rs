//! Command line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// `--database-url` value that selects the in-memory store
pub const MEMORY_DATABASE: &str = "memory";

/// Book service - CRUD HTTP API for book records
#[derive(Parser, Debug, Clone)]
#[command(name = "book-service")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "BOOK_SERVICE_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// SQLite URL, or "memory" for a non-persistent store
    #[arg(long, env = "BOOK_SERVICE_DATABASE_URL", default_value = "sqlite:books.db")]
    pub database_url: String,

    /// Directory of static frontend files served for non-API paths
    #[arg(long, env = "BOOK_SERVICE_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// tracing filter directive, e.g. "info" or "book_service=debug,tower_http=debug"
    #[arg(long, env = "BOOK_SERVICE_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE
    }
}
