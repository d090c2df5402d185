use crate::ml::client::UpstreamError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

fn upstream_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.ml.health().await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::warn!("ml api unavailable: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "ml api unavailable",
                    "message": "the prediction service is not reachable; make sure it is running",
                    "status": "offline",
                })),
            )
                .into_response()
        }
    }
}

pub async fn predict_paris2024(State(state): State<AppState>) -> impl IntoResponse {
    match state.ml.predict_paris2024().await {
        Ok(body) => {
            let predictions = body.get("predictions").cloned().unwrap_or_else(|| body.clone());
            let metadata = body.get("metadata").cloned().unwrap_or_else(|| {
                json!({ "model": "Ensemble (Linear + Random Forest)" })
            });
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "source": "ml-api",
                    "predictions": predictions,
                    "metadata": metadata,
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("paris 2024 prediction failed: {e}");
            let status = match &e {
                UpstreamError::Status { code, .. } => upstream_status(*code),
                UpstreamError::Unreachable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(json!({
                    "error": "failed to fetch paris 2024 predictions",
                    "message": e.to_string(),
                    "fallback": true,
                })),
            )
                .into_response()
        }
    }
}

pub async fn predict_country(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.ml.predict_country(&name).await {
        Ok(body) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "country": name,
                "prediction": body,
            })),
        )
            .into_response(),
        Err(UpstreamError::Status { code: 404, .. }) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "country not found",
                "message": format!("no prediction available for \"{name}\""),
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("prediction for {name} failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "failed to fetch country prediction",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

pub async fn models_info(State(state): State<AppState>) -> impl IntoResponse {
    match state.ml.models_info().await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::error!("model info fetch failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "failed to fetch model information",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

pub async fn retrain(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    tracing::info!("forwarding retrain request to the ml api");

    let payload: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));
    match state.ml.retrain(payload).await {
        Ok(data) => {
            tracing::info!("models retrained");
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": "models retrained",
                    "data": data,
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("retraining failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "failed to retrain models",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

// History lives in the relational store once one is wired up; until then the
// endpoint keeps its contract with an empty list.
pub async fn predictions_history() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "prediction history requires the relational store",
            "history": [],
        })),
    )
}
