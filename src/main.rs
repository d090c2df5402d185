use olympics_gateway::catalog::athletes::StaticAthletes;
use olympics_gateway::catalog::countries::StaticCountries;
use olympics_gateway::catalog::predictions::StaticPredictions;
use olympics_gateway::catalog::stats::StaticStats;
use olympics_gateway::config::AppConfig;
use olympics_gateway::http::router::build_router;
use olympics_gateway::ml::client::MlClient;
use olympics_gateway::{storage, AppState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let storage = storage::connect(&cfg.db)?;

    let state = AppState {
        stats: Arc::new(StaticStats::new()),
        countries: Arc::new(StaticCountries::new()),
        athletes: Arc::new(StaticAthletes::new()),
        predictions: Arc::new(StaticPredictions::new()),
        ml: MlClient::new(cfg.ml_api_url.clone()),
        storage,
        config: cfg.clone(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    tracing::info!("environment: {}", cfg.environment);
    tracing::info!("database: {}", cfg.db.kind);
    axum::serve(listener, app).await?;
    Ok(())
}
