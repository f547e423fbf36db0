use book_service::{config::Config, create_router, initialize_backend};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let app_state = initialize_backend(&config).await?;
    let store_kind = app_state.book_service.storage_kind();
    let app = create_router(app_state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Book service listening on {} ({} store)", listener.local_addr()?, store_kind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Book service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
