use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Olympics Analytics API",
            "version": "1.0.0",
            "endpoints": {
                "stats": "/api/stats",
                "predictions": "/api/predictions",
                "countries": "/api/countries",
                "athletes": "/api/athletes",
                "ml": "/api/ml",
            },
        })),
    )
}

pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = state.storage.ping().await.is_ok();

    let status = if db_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "ready": db_ok,
            "db": db_ok,
            "storage": state.storage.kind(),
        })),
    )
        .into_response()
}

pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "alive": true })))
}
