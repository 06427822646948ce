use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{PlayerCount, RegisterPlayerRequest};
use super::{run_blocking, AppState};

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match run_blocking(&state.service, |service| service.list_players()).await {
        Ok(players) => Json(players).into_response(),
        Err(response) => response,
    }
}

pub async fn get_player_count(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match run_blocking(&state.service, |service| service.count_players()).await {
        Ok(count) => Json(PlayerCount { count }).into_response(),
        Err(response) => response,
    }
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> impl IntoResponse {
    let result = run_blocking(&state.service, move |service| {
        service.register_player(&request.name)
    })
    .await;

    match result {
        Ok(player) => (StatusCode::CREATED, Json(player)).into_response(),
        Err(response) => response,
    }
}

pub async fn delete_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match run_blocking(&state.service, |service| service.delete_players()).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(response) => response,
    }
}
