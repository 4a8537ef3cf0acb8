//! Listener setup and shutdown for the judge API.
//!
//! [`start_server`] binds the address from [`ServerSettings`] and serves the
//! router until `Ctrl-C`. In-flight validations finish before it returns.

use std::sync::Arc;

use judge_core::config::ServerSettings;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Serve the judge API on `settings.host:settings.port`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address cannot be bound and
/// [`ServerError::Serve`] if the accept loop fails.
pub async fn start_server(
    settings: &ServerSettings,
    state: Arc<AppState>,
) -> Result<(), ServerError> {
    let endpoint = format!("{}:{}", settings.host, settings.port);
    let listener = match TcpListener::bind(endpoint.as_str()).await {
        Ok(listener) => listener,
        Err(source) => return Err(ServerError::Bind { endpoint, source }),
    };
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, instances = state.judge.instances().len(), "Judge listening");
    }

    if let Err(source) = axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        return Err(ServerError::Serve { source });
    }

    info!("Judge stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "Ctrl-C handler unavailable, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, draining requests");
}

/// Failure to start or keep serving the judge API.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("cannot listen on {endpoint}: {source}")]
    Bind {
        /// `host:port` that was requested.
        endpoint: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The accept loop stopped with an error.
    #[error("judge server failed: {source}")]
    Serve {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
