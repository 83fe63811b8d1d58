//! HTTP server startup logic.
//!
//! Plain HTTP only. Binding is split from serving so a bind failure surfaces
//! before anything is announced, and so tests can bind an ephemeral port.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AppConfig, HTTP_BIND_ADDR, HTTP_PORT};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the TCP listener. No retry and no fallback port.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr).await.map_err(|source| {
        tracing::error!(%addr, error = %source, "Failed to bind listener");
        ServerError::Bind {
            addr: addr.to_string(),
            source,
        }
    })
}

/// Serve the router on an already bound listener.
///
/// Emits the startup line, then blocks until the accept loop fails. Each
/// connection is handled on its own task.
pub async fn serve(listener: TcpListener, app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let port = listener
        .local_addr()
        .map(|addr: SocketAddr| addr.port())
        .unwrap_or(HTTP_PORT);

    tracing::info!(
        port,
        version = %config.version,
        "Starting server on port {} (version: {})",
        port,
        config.version
    );

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Bind all interfaces on port 8080 and serve until a fatal error.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(HTTP_BIND_ADDR).await?;
    serve(listener, app, config).await
}
