use crate::http::error::{internal_error, not_found};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.countries.list().await {
        Ok(countries) => (StatusCode::OK, Json(countries)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load countries", e).into_response(),
    }
}

pub async fn detail(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    match state.countries.detail(&code).await {
        Ok(Some(detail)) => (StatusCode::OK, Json(detail)).into_response(),
        Ok(None) => not_found(
            "country not found",
            format!("no data available for \"{code}\""),
        )
        .into_response(),
        Err(e) => {
            internal_error(&state.config, "failed to load country details", e).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub countries: Option<String>,
}

pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> impl IntoResponse {
    let codes: Vec<String> = query
        .countries
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    match state.countries.compare(&codes).await {
        Ok(comparison) => (StatusCode::OK, Json(comparison)).into_response(),
        Err(e) => internal_error(&state.config, "failed to compare countries", e).into_response(),
    }
}
