use std::sync::Arc;

use noteful_api::{
    AppState, config,
    handlers::rest,
    repository::Repository,
    service::{FolderService, NoteService},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log setup
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Load config
    let cfg = config::load_config().inspect_err(|e| {
        tracing::error!("Failed to load config: {e}");
    })?;

    // Repository creation and migration
    let mut repo = Repository::new(&cfg.pg_dsn).await.inspect_err(|e| {
        tracing::error!("Failed to establish database connection: {e}");
    })?;

    repo.migrate().await.inspect_err(|e| {
        tracing::error!("Failed to migrate database: {e}");
    })?;

    let repo = Arc::new(repo);

    // Service creation
    let state = AppState::new(
        FolderService::new(repo.clone()),
        NoteService::new(repo.clone()),
    );

    let router = rest::router(state, &cfg.cors_origins);

    let listener = tokio::net::TcpListener::bind(cfg.socket_addr()).await?;
    tracing::info!("REST server starting, listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!("HTTP server error: {e}"))?;

    tracing::info!("Server stopped, closing store");
    match Arc::try_unwrap(repo) {
        Ok(repo) => repo.close().await,
        Err(_) => tracing::warn!("Store handle still shared at shutdown, skipping close"),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
