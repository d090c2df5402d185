use crate::http::error::internal_error;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn paris2024(State(state): State<AppState>) -> impl IntoResponse {
    match state.predictions.paris2024().await {
        Ok(predictions) => (StatusCode::OK, Json(predictions)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load predictions", e).into_response(),
    }
}

pub async fn athletes(State(state): State<AppState>) -> impl IntoResponse {
    match state.predictions.athletes().await {
        Ok(predictions) => (StatusCode::OK, Json(predictions)).into_response(),
        Err(e) => {
            internal_error(&state.config, "failed to load athlete predictions", e).into_response()
        }
    }
}

pub async fn clustering(State(state): State<AppState>) -> impl IntoResponse {
    match state.predictions.clustering().await {
        Ok(clustering) => (StatusCode::OK, Json(clustering)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load clustering", e).into_response(),
    }
}

pub async fn models(State(state): State<AppState>) -> impl IntoResponse {
    match state.predictions.models().await {
        Ok(models) => (StatusCode::OK, Json(models)).into_response(),
        Err(e) => {
            internal_error(&state.config, "failed to load model comparison", e).into_response()
        }
    }
}
