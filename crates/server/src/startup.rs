use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StoreBackend, StoreConfig};
use serde_json::Value;
use service::runtime;
use service::storage::{json_map_store::JsonMapStore, memory::MemoryStore, KeyValueStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::handler::Handlers;
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the records table on the configured backend.
pub async fn open_store(cfg: &StoreConfig) -> Result<Arc<dyn KeyValueStore>, StartupError> {
    match cfg.backend {
        StoreBackend::Memory => {
            info!(table = %cfg.table_name, "using in-memory store");
            let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
            Ok(store)
        }
        StoreBackend::File => {
            runtime::ensure_env(&cfg.data_dir).await?;
            let path = cfg.table_file();
            info!(table = %cfg.table_name, path = %path.display(), "using file store");
            let store: Arc<dyn KeyValueStore> = JsonMapStore::<String, Value>::new(path).await?;
            Ok(store)
        }
    }
}

/// Store plus routes, without binding a socket.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let store = open_store(&cfg.store).await?;
    let handlers = Arc::new(Handlers::new(store, cfg.store.table_name.clone()));
    Ok(routes::build_router(handlers, build_cors()))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Public entry: build the app and run the HTTP server until it stops.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.store.backend, "starting api records server");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
