// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server lifecycle management: startup and serving until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use talkers_core::RandomTokenGen;
use talkers_engine::Talkers;
use talkers_storage::{JsonFileStore, StorageError, TracedStore};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::http;

/// Service with its concrete store (wrapped with tracing)
pub type ServerTalkers = Talkers<TracedStore<JsonFileStore>, RandomTokenGen>;

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to bind {0}: {1}")]
    BindFailed(SocketAddr, std::io::Error),

    #[error("Invalid log path: {0}")]
    InvalidLogPath(std::path::PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Server state once startup has completed
pub struct ServerState {
    /// Configuration
    pub config: Config,
    /// Bound TCP listener
    pub listener: TcpListener,
    /// Talker service shared with request handlers
    pub talkers: Arc<ServerTalkers>,
    /// When the server started
    pub start_time: Instant,
}

impl ServerState {
    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> Result<SocketAddr, LifecycleError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until `shutdown` completes
    pub async fn serve<F>(self, shutdown: F) -> Result<(), LifecycleError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = http::router(Arc::clone(&self.talkers));
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!(
            uptime_secs = self.start_time.elapsed().as_secs(),
            "Server stopped"
        );
        Ok(())
    }
}

/// Start the server: prepare the data file, then bind
pub async fn startup(config: &Config) -> Result<ServerState, LifecycleError> {
    // 1. Data file must be readable before accepting connections
    let store = JsonFileStore::new(&config.data_path);
    if store.ensure_exists().await? {
        info!(path = %config.data_path.display(), "Created empty talker collection");
    }

    // 2. Bind (LAST - only after storage is ready)
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| LifecycleError::BindFailed(addr, e))?;

    let talkers = Talkers::new(TracedStore::new(store), RandomTokenGen);

    info!(
        data = %config.data_path.display(),
        "Server started"
    );

    Ok(ServerState {
        config: config.clone(),
        listener,
        talkers: Arc::new(talkers),
        start_time: Instant::now(),
    })
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
