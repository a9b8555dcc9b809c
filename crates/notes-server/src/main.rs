//! Entry point for the notes-server binary.

use std::sync::Arc;

use notes_server::{
    app::build_app,
    config::{ConfigError, ServerConfig, StoreBackend},
    state::AppState,
};
use notes_store::{MemoryNoteStore, NoteGateway, PgNoteStore};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!("Starting notes-server");
    tracing::info!(
        "Configuration: port={}, log_level={}, store={:?}, static_dir={}",
        config.port,
        config.log_level,
        config.store_backend,
        config.static_dir.display()
    );

    // Connect to the persistence backend
    let notes: Arc<dyn NoteGateway> = match config.store_backend {
        StoreBackend::Postgres => {
            let store_config = config
                .database
                .clone()
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
            Arc::new(PgNoteStore::connect(store_config).await?)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; notes will not survive a restart");
            Arc::new(MemoryNoteStore::new())
        }
    };

    // Build application state and router
    let addr = config.socket_addr();
    let state = AppState::new(notes, config);
    let app = build_app(state)?;

    // Create listener
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running on port {}", addr.port());

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
