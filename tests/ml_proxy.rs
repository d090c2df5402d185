use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use olympics_gateway::catalog::athletes::StaticAthletes;
use olympics_gateway::catalog::countries::StaticCountries;
use olympics_gateway::catalog::predictions::StaticPredictions;
use olympics_gateway::catalog::stats::StaticStats;
use olympics_gateway::config::{AppConfig, DatabaseConfig};
use olympics_gateway::http::router::build_router;
use olympics_gateway::ml::client::MlClient;
use olympics_gateway::{storage, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

fn test_config(ml_api_url: &str) -> AppConfig {
    AppConfig {
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
        ml_api_url: ml_api_url.to_string(),
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

async fn spawn_gateway(ml_api_url: &str) -> String {
    let cfg = test_config(ml_api_url);
    let state = AppState {
        stats: Arc::new(StaticStats::new()),
        countries: Arc::new(StaticCountries::new()),
        athletes: Arc::new(StaticAthletes::new()),
        predictions: Arc::new(StaticPredictions::new()),
        ml: MlClient::new(cfg.ml_api_url.clone()),
        storage: storage::connect(&cfg.db).unwrap(),
        config: cfg,
    };
    spawn(build_router(state)).await
}

fn stub_upstream() -> Router {
    Router::new()
        .route(
            "/api/ml/health",
            get(|| async { Json(json!({ "status": "ok", "models_loaded": true })) }),
        )
        .route(
            "/api/ml/predict/paris2024",
            get(|| async {
                Json(json!({
                    "predictions": [
                        { "country": "USA", "total": 275 },
                        { "country": "France", "total": 76 },
                    ],
                    "metadata": { "model": "ensemble", "features": 12 },
                }))
            }),
        )
        .route(
            "/api/ml/predict/country/:name",
            get(|Path(name): Path<String>| async move {
                if name == "France" {
                    Json(json!({ "country": "France", "total": 76, "confidence": 0.85 }))
                        .into_response()
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "error": "unknown country" })),
                    )
                        .into_response()
                }
            }),
        )
        .route(
            "/api/ml/models/info",
            get(|| async { Json(json!({ "models": ["linear", "random_forest"] })) }),
        )
        .route(
            "/api/ml/retrain",
            post(|| async { Json(json!({ "trained": true, "duration_s": 2 })) }),
        )
}

/// An address nothing listens on: bind, read the port, drop the listener.
async fn dead_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn health_relays_the_upstream_body() {
    let upstream = spawn(stub_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/ml/health")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["models_loaded"], true);
}

#[tokio::test]
async fn paris2024_success_is_wrapped_in_the_envelope() {
    let upstream = spawn(stub_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let body: Value = reqwest::get(format!("{gateway}/api/ml/predict/paris2024"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "ml-api");
    assert_eq!(body["predictions"].as_array().unwrap().len(), 2);
    assert_eq!(body["metadata"]["model"], "ensemble");
}

#[tokio::test]
async fn known_country_prediction_is_relayed() {
    let upstream = spawn(stub_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let body: Value = reqwest::get(format!("{gateway}/api/ml/predict/country/France"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["country"], "France");
    assert_eq!(body["prediction"]["total"], 76);
}

#[tokio::test]
async fn unknown_country_propagates_404_and_names_the_value() {
    let upstream = spawn(stub_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/ml/predict/country/Atlantis"))
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Atlantis"));
}

#[tokio::test]
async fn models_info_is_relayed_verbatim() {
    let upstream = spawn(stub_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let body: Value = reqwest::get(format!("{gateway}/api/ml/models/info"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["models"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn retrain_returns_as_soon_as_the_upstream_does() {
    let upstream = spawn(stub_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let started = std::time::Instant::now();
    let resp = reqwest::Client::new()
        .post(format!("{gateway}/api/ml/retrain"))
        .json(&json!({ "models": ["random_forest"] }))
        .send()
        .await
        .unwrap();
    assert!(started.elapsed() < std::time::Duration::from_secs(5));

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["trained"], true);
}

#[tokio::test]
async fn offline_upstream_degrades_health_to_503() {
    let gateway = spawn_gateway(&dead_upstream().await).await;

    let resp = reqwest::get(format!("{gateway}/api/ml/health")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "offline");
}

#[tokio::test]
async fn offline_upstream_maps_other_ml_routes_to_500() {
    let gateway = spawn_gateway(&dead_upstream().await).await;

    for path in [
        "/api/ml/predict/paris2024",
        "/api/ml/predict/country/France",
        "/api/ml/models/info",
    ] {
        let resp = reqwest::get(format!("{gateway}{path}")).await.unwrap();
        assert_eq!(
            resp.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "{path} should map transport failure to 500"
        );
    }

    let resp = reqwest::Client::new()
        .post(format!("{gateway}/api/ml/retrain"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn prediction_history_is_an_empty_stub() {
    let gateway = spawn_gateway(&dead_upstream().await).await;

    let body: Value = reqwest::get(format!("{gateway}/api/ml/predictions/history"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["history"].as_array().unwrap().len(), 0);
}
