use crate::http::handlers::{athletes, countries, ml, ops, predictions, stats};
use crate::http::middleware::request_log;
use crate::AppState;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ops::index))
        .route("/api/stats/overview", get(stats::overview))
        .route("/api/stats/france", get(stats::france))
        .route("/api/stats/medals-by-year", get(stats::medals_by_year))
        .route("/api/stats/top-sports", get(stats::top_sports))
        .route("/api/stats/host-countries", get(stats::host_countries))
        .route("/api/stats/historic-events", get(stats::historic_events))
        .route("/api/countries", get(countries::list))
        .route("/api/countries/compare", get(countries::compare))
        .route("/api/countries/:code", get(countries::detail))
        .route("/api/athletes", get(athletes::list))
        .route("/api/athletes/legends", get(athletes::legends))
        .route("/api/athletes/:id", get(athletes::detail))
        .route("/api/predictions/paris2024", get(predictions::paris2024))
        .route("/api/predictions/athletes", get(predictions::athletes))
        .route("/api/predictions/clustering", get(predictions::clustering))
        .route("/api/predictions/models", get(predictions::models))
        .route("/api/ml/health", get(ml::health))
        .route("/api/ml/predict/paris2024", get(ml::predict_paris2024))
        .route("/api/ml/predict/country/:name", get(ml::predict_country))
        .route("/api/ml/models/info", get(ml::models_info))
        .route("/api/ml/retrain", post(ml::retrain))
        .route("/api/ml/predictions/history", get(ml::predictions_history))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .fallback(not_found)
        .layer(from_fn(request_log::log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "route not found" })),
    )
}
