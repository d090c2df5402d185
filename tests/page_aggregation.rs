use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use olympics_gateway::catalog::athletes::StaticAthletes;
use olympics_gateway::catalog::countries::StaticCountries;
use olympics_gateway::catalog::predictions::StaticPredictions;
use olympics_gateway::catalog::stats::StaticStats;
use olympics_gateway::client::api::ApiClient;
use olympics_gateway::client::pages;
use olympics_gateway::config::{AppConfig, DatabaseConfig};
use olympics_gateway::http::handlers::stats;
use olympics_gateway::http::router::build_router;
use olympics_gateway::ml::client::MlClient;
use olympics_gateway::{storage, AppState};
use serde_json::json;
use std::sync::Arc;

fn test_state() -> AppState {
    let cfg = AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        environment: "test".to_string(),
        db: DatabaseConfig {
            kind: "mysql".to_string(),
            host: "localhost".to_string(),
            port: 3306,
            user: "olympics".to_string(),
            password: String::new(),
            name: "olympics".to_string(),
        },
        ml_api_url: "http://127.0.0.1:1".to_string(),
    };
    AppState {
        stats: Arc::new(StaticStats::new()),
        countries: Arc::new(StaticCountries::new()),
        athletes: Arc::new(StaticAthletes::new()),
        predictions: Arc::new(StaticPredictions::new()),
        ml: MlClient::new(cfg.ml_api_url.clone()),
        storage: storage::connect(&cfg.db).unwrap(),
        config: cfg,
    }
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn statistics_page_joins_all_four_calls() {
    let base = spawn(build_router(test_state())).await;
    let api = ApiClient::new(format!("{base}/api"));

    let page = pages::load_statistics(&api).await.unwrap();
    assert!(!page.medals_by_year.is_empty());
    assert!(!page.top_sports.is_empty());
    assert!(!page.host_countries.is_empty());
    assert!(!page.historic_events.is_empty());
}

#[tokio::test]
async fn france_page_view_model_is_consistent() {
    let base = spawn(build_router(test_state())).await;
    let api = ApiClient::new(format!("{base}/api"));

    let page = pages::load_france(&api).await.unwrap();
    let best = page
        .medals_by_year
        .iter()
        .find(|y| y.year == page.stats.best_year.year)
        .unwrap();
    assert_eq!(best.gold + best.silver + best.bronze, page.stats.best_year.medals);
}

#[tokio::test]
async fn predictions_page_loads_every_panel() {
    let base = spawn(build_router(test_state())).await;
    let api = ApiClient::new(format!("{base}/api"));

    let page = pages::load_predictions(&api).await.unwrap();
    assert_eq!(page.paris2024.france.total, 76);
    assert!(!page.athletes.is_empty());
    assert_eq!(page.clustering.clusters.len(), 5);
    assert_eq!(page.models.len(), 5);
}

#[tokio::test]
async fn one_failed_call_fails_the_whole_page() {
    // Same four routes the statistics page fans out to, with one of them
    // broken: three healthy panels must not produce a partial page.
    async fn failing() -> (StatusCode, Json<serde_json::Value>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "failed to load historic events" })),
        )
    }

    let app = Router::new()
        .route("/api/stats/medals-by-year", get(stats::medals_by_year))
        .route("/api/stats/top-sports", get(stats::top_sports))
        .route("/api/stats/host-countries", get(stats::host_countries))
        .route("/api/stats/historic-events", get(failing))
        .with_state(test_state());

    let base = spawn(app).await;
    let api = ApiClient::new(format!("{base}/api"));

    assert!(api.top_sports().await.is_ok());
    assert!(api.host_countries().await.is_ok());
    assert!(api.medals_by_year(Some("FRA")).await.is_ok());

    assert!(pages::load_statistics(&api).await.is_err());
}

#[tokio::test]
async fn athletes_page_loads_list_and_legends_together() {
    let base = spawn(build_router(test_state())).await;
    let api = ApiClient::new(format!("{base}/api"));

    let page = pages::load_athletes(&api).await.unwrap();
    assert!(page.athletes.len() >= 10);
    assert_eq!(page.legends.len(), 3);
}
