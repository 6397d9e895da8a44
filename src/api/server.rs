//! Server bootstrap: bind the configured address, serve the router, shut
//! down gracefully on Ctrl-C.

use thiserror::Error;
use tokio::net::TcpListener;

use crate::api::router::api_router;
use crate::config::ServiceConfig;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the configured address and serve until shutdown.
pub async fn serve(config: ServiceConfig) -> Result<(), ServerError> {
    let addr = config.listen_addr.clone();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(addr = %addr, "Listening");

    let app = api_router(config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler we cannot shut down cleanly; keep
            // serving rather than exiting immediately.
            tracing::error!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}
