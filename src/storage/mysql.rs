use crate::config::DatabaseConfig;
use crate::storage::StorageBackend;
use anyhow::Result;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

pub struct MySqlStorage {
    pub pool: MySqlPool,
}

impl MySqlStorage {
    pub fn connect_lazy(cfg: &DatabaseConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(std::time::Duration::from_secs(2))
            .connect_lazy(&cfg.url())?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl StorageBackend for MySqlStorage {
    fn kind(&self) -> &'static str {
        "mysql"
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
