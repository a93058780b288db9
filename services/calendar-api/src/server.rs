//! HTTP listener lifecycle for the calendar service.
//!
//! [`CalendarServer`] owns the listening socket. The host calls
//! [`CalendarServer::start`] once to bind and [`CalendarServer::stop`] once
//! to close it; both are no-ops when repeated.

use axum::{extract::Extension, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::handlers::calendar_handler;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read local address: {0}")]
    LocalAddr(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Server task failed: {0}")]
    Task(String),
}

/// Build the HTTP router. Every method and path reaches the calendar handler.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(calendar_handler)
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// A bound listener and the task serving it.
struct RunningServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningServer {
    fn signal_shutdown(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.signal_shutdown();
    }
}

/// Calendar SVG server with an explicit start/stop lifecycle.
pub struct CalendarServer {
    config: ServerConfig,
    state: Arc<AppState>,
    running: Option<RunningServer>,
}

impl CalendarServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(config, AppState::new())
    }

    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Address actually bound, once started.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.running.as_ref().map(|r| r.addr)
    }

    /// Bind the listener and start serving in the background.
    ///
    /// Returns the bound address. Calling this while already running
    /// returns the existing address without rebinding.
    pub async fn start(&mut self) -> Result<SocketAddr, ServerError> {
        if let Some(running) = &self.running {
            return Ok(running.addr);
        }

        let listener = TcpListener::bind(self.config.listen)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.config.listen,
                source,
            })?;
        let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = build_router(self.state.clone());

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(address = %addr, "Calendar SVG server started");

        self.running = Some(RunningServer {
            addr,
            shutdown: Some(shutdown_tx),
            task,
        });
        Ok(addr)
    }

    /// Close the listener and wait for in-flight requests to finish.
    ///
    /// Does nothing if the server is not running.
    pub async fn stop(&mut self) -> Result<(), ServerError> {
        let Some(mut running) = self.running.take() else {
            return Ok(());
        };

        running.signal_shutdown();
        let result = (&mut running.task).await;
        info!(address = %running.addr, "Calendar SVG server stopped");

        match result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                warn!(error = %e, "Server exited with error");
                Err(ServerError::Serve(e))
            }
            Err(e) => Err(ServerError::Task(e.to_string())),
        }
    }
}

impl Drop for CalendarServer {
    fn drop(&mut self) {
        if self.running.is_some() {
            warn!("Calendar SVG server dropped while running, shutting down");
        }
    }
}
