use crate::config::DatabaseConfig;
use crate::storage::StorageBackend;
use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub struct PostgresStorage {
    pub pool: PgPool,
}

impl PostgresStorage {
    pub fn connect_lazy(cfg: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .acquire_timeout(std::time::Duration::from_secs(2))
            .connect_lazy(&cfg.url())?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl StorageBackend for PostgresStorage {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
