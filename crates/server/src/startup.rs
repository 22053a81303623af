use std::{net::SocketAddr, sync::Arc, time::Duration};

use configs::{AppConfig, BackendKind, ServerConfig, StorageConfig};
use service::{
    storage::{FileBackend, MemoryBackend, RemoteTableBackend, RemoteTableConfig},
    ContentStore, SnapshotBackend,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {}", server.host, server.port, e)))
}

/// Pick the snapshot backend named in `[storage]`.
pub async fn build_backend(storage: &StorageConfig) -> Result<Arc<dyn SnapshotBackend>, StartupError> {
    match storage.backend {
        BackendKind::File => {
            let backend = FileBackend::new(&storage.data_dir).await?;
            info!(path = %backend.path_for(&storage.key).display(), "using file backend");
            Ok(backend)
        }
        BackendKind::Memory => {
            warn!("using in-memory backend; edits are lost on restart");
            Ok(MemoryBackend::new())
        }
        BackendKind::Remote => {
            let remote = &storage.remote;
            let backend = RemoteTableBackend::new(RemoteTableConfig {
                url: remote.url.clone(),
                api_key: remote.anon_key.clone(),
                table: remote.table.clone(),
                timeout: Duration::from_secs(remote.timeout_secs),
            })?;
            info!(endpoint = backend.endpoint(), "using remote table backend");
            Ok(Arc::new(backend))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Open the store, serve until ctrl-c, then drain queued snapshot writes.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let backend = build_backend(&cfg.storage).await?;
    let store = ContentStore::open(backend, cfg.storage.key.clone()).await;

    if !cfg.admin.enabled() {
        warn!("no admin password configured; editor routes will reject every request");
    }
    let state = AppState::new(Arc::clone(&store), cfg.admin.password.clone());
    let app = routes::build_router(state, build_cors(), cfg.server.max_body_bytes);

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting portfolio server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.flush().await;
    info!("pending snapshot writes flushed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let server = ServerConfig { host: "not a host".into(), ..Default::default() };
        assert!(matches!(bind_addr(&server), Err(StartupError::InvalidConfig(_))));
        assert!(bind_addr(&ServerConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn memory_backend_needs_no_setup() {
        let storage = StorageConfig { backend: BackendKind::Memory, ..Default::default() };
        let backend = build_backend(&storage).await.unwrap();
        assert_eq!(backend.read(&storage.key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_backend_creates_its_data_dir() -> Result<(), StartupError> {
        let dir = std::env::temp_dir()
            .join(format!("portfolio_startup_{}", uuid::Uuid::new_v4()))
            .join("nested");
        let storage = StorageConfig {
            backend: BackendKind::File,
            data_dir: dir.to_string_lossy().into_owned(),
            ..Default::default()
        };
        let backend = build_backend(&storage).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        backend.write(&storage.key, "{}").await?;
        assert!(tokio::fs::metadata(dir.join("portfolio_data_v1.json")).await?.is_file());
        Ok(())
    }
}
