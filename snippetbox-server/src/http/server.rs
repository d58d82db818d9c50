//! Axum server setup
//!
//! Server skeleton with:
//! - The interceptor pipeline around every route
//! - Peer addresses available to request logging
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use super::pipeline::Pipeline;
use super::routes;
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:4000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
        }
    }
}

/// Build the application router with the pipeline applied.
pub fn build_router(state: AppState, pipeline: &Pipeline) -> Router {
    let routes = Router::new()
        .merge(routes::health::router())
        .merge(routes::snippets::router())
        .with_state(state);

    pipeline.apply(routes)
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// Returns once in-flight requests have drained; closing the pool is left to
/// the caller.
///
/// # Example
///
/// ```ignore
/// let pool = ConnectionPool::open(&database_url).await?;
/// let state = AppState::new(pool.clone());
/// run_server(state, &Pipeline::builder().build(), ServerConfig::default()).await?;
/// pool.close().await;
/// ```
pub async fn run_server(
    state: AppState,
    pipeline: &Pipeline,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let app = build_router(state, pipeline);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        chain = ?pipeline.names(),
        "Server listening on {}",
        config.bind_addr
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
