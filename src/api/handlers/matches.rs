use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::ReportMatchRequest;
use super::{run_blocking, AppState};

pub async fn get_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match run_blocking(&state.service, |service| service.list_matches()).await {
        Ok(matches) => Json(matches).into_response(),
        Err(response) => response,
    }
}

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportMatchRequest>,
) -> impl IntoResponse {
    let result = run_blocking(&state.service, move |service| {
        service.report_match(request.winner, request.loser)
    })
    .await;

    match result {
        Ok(recorded) => (StatusCode::CREATED, Json(recorded)).into_response(),
        Err(response) => response,
    }
}

pub async fn delete_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match run_blocking(&state.service, |service| service.delete_matches()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(response) => response,
    }
}
