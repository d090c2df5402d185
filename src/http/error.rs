use crate::config::AppConfig;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Generic 500 mapping. The underlying error text is exposed in the body only
/// outside production.
pub fn internal_error(
    config: &AppConfig,
    summary: &str,
    err: anyhow::Error,
) -> (StatusCode, Json<Value>) {
    tracing::error!("{summary}: {err:#}");

    let mut body = json!({ "error": summary });
    if !config.is_production() {
        body["message"] = json!(err.to_string());
    }
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
}

pub fn not_found(summary: &str, message: String) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": summary, "message": message })),
    )
}
