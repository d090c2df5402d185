use crate::http::error::internal_error;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

pub async fn overview(State(state): State<AppState>) -> impl IntoResponse {
    match state.stats.overview().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load overview stats", e).into_response(),
    }
}

pub async fn france(State(state): State<AppState>) -> impl IntoResponse {
    match state.stats.france().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load France stats", e).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct MedalsByYearQuery {
    pub country: Option<String>,
}

pub async fn medals_by_year(
    State(state): State<AppState>,
    Query(query): Query<MedalsByYearQuery>,
) -> impl IntoResponse {
    match state.stats.medals_by_year(query.country.as_deref()).await {
        Ok(series) => (StatusCode::OK, Json(series)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load medals by year", e).into_response(),
    }
}

pub async fn top_sports(State(state): State<AppState>) -> impl IntoResponse {
    match state.stats.top_sports().await {
        Ok(sports) => (StatusCode::OK, Json(sports)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load top sports", e).into_response(),
    }
}

pub async fn host_countries(State(state): State<AppState>) -> impl IntoResponse {
    match state.stats.host_countries().await {
        Ok(hosts) => (StatusCode::OK, Json(hosts)).into_response(),
        Err(e) => internal_error(&state.config, "failed to load host countries", e).into_response(),
    }
}

pub async fn historic_events(State(state): State<AppState>) -> impl IntoResponse {
    match state.stats.historic_events().await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => {
            internal_error(&state.config, "failed to load historic events", e).into_response()
        }
    }
}
