use crate::domain::athlete::AthleteFilter;
use crate::http::error::{internal_error, not_found};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AthleteFilter>,
) -> impl IntoResponse {
    match state.athletes.list(&filter).await {
        Ok(athletes) => (StatusCode::OK, Json(athletes)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load athletes", e).into_response(),
    }
}

pub async fn legends(State(state): State<AppState>) -> impl IntoResponse {
    match state.athletes.legends().await {
        Ok(legends) => (StatusCode::OK, Json(legends)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load legends", e).into_response(),
    }
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.athletes.detail(id).await {
        Ok(Some(athlete)) => (StatusCode::OK, Json(athlete)).into_response(),
        Ok(None) => not_found("athlete not found", format!("no athlete with id {id}"))
            .into_response(),
        Err(e) => {
            internal_error(&state.config, "failed to load athlete details", e).into_response()
        }
    }
}
