#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub environment: String,
    pub db: DatabaseConfig,
    pub ml_api_url: String,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub kind: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            db: DatabaseConfig::from_env(),
            ml_api_url: std::env::var("ML_API_URL")
                .unwrap_or_else(|_| "http://localhost:5001".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let kind = std::env::var("DB_TYPE").unwrap_or_else(|_| "mysql".to_string());
        let default_port = if kind == "postgres" { 5432 } else { 3306 };
        Self {
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(default_port),
            kind,
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "olympics".to_string()),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            name: std::env::var("DB_NAME").unwrap_or_else(|_| "olympics".to_string()),
        }
    }

    pub fn url(&self) -> String {
        let scheme = if self.kind == "postgres" { "postgres" } else { "mysql" };
        format!(
            "{}://{}:{}@{}:{}/{}",
            scheme, self.user, self.password, self.host, self.port, self.name
        )
    }
}
