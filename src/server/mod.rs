pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod shutdown;

use std::future::IntoFuture;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{Config, ConfigError};
use crate::fault::{FaultMode, FaultToggle};
use crate::server::router::build_router;
use crate::server::shutdown::ShutdownManager;
use crate::store::DataStore;

/// Shared state injected into every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<DataStore>,
    pub fault: FaultToggle,
    pub fault_mode: FaultMode,
    pub version: &'static str,
}

impl AppState {
    pub fn new(fault_mode: FaultMode) -> Self {
        Self {
            store: Arc::new(DataStore::new()),
            fault: FaultToggle::new(),
            fault_mode,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub struct ApiServer {
    pub addr: SocketAddr,
    /// Populated by bind(), consumed by run().
    listener: Option<TcpListener>,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl ApiServer {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            addr: config.bind_addr()?,
            listener: None,
            state: AppState::new(config.fault.mode),
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Bind the configured address.
    ///
    /// Port 0 picks a free port; the actual address is returned and stored
    /// in `self.addr`.
    pub async fn bind(&mut self) -> io::Result<SocketAddr> {
        let listener = TcpListener::bind(self.addr).await?;
        let actual_addr = listener.local_addr()?;
        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!("Server bound to {}", actual_addr);
        Ok(actual_addr)
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until shutdown is signaled.
    ///
    /// Consumes self to take ownership of the bound listener.
    /// Call bind() before run().
    pub async fn run(self) -> io::Result<()> {
        let listener = self
            .listener
            .ok_or_else(|| io::Error::other("bind() must be called before run()"))?;

        tracing::info!(
            addr = %self.addr,
            fault_mode = %self.state.fault_mode,
            "Starting mock API server"
        );

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.wait_for_shutdown().await;
            })
            .into_future()
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
