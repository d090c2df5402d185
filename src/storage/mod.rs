use crate::config::DatabaseConfig;
use anyhow::Result;
use std::sync::Arc;

pub mod mysql;
pub mod postgres;

#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    fn kind(&self) -> &'static str;
    async fn ping(&self) -> Result<()>;
}

// Driver is picked once at startup; pools are lazy, so nothing connects
// until the readiness probe queries.
pub fn connect(cfg: &DatabaseConfig) -> Result<Arc<dyn StorageBackend>> {
    let backend: Arc<dyn StorageBackend> = match cfg.kind.as_str() {
        "postgres" => Arc::new(postgres::PostgresStorage::connect_lazy(cfg)?),
        _ => Arc::new(mysql::MySqlStorage::connect_lazy(cfg)?),
    };
    tracing::info!("{} pool created", backend.kind());
    Ok(backend)
}
