use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{run_blocking, AppState};

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match run_blocking(&state.service, |service| service.player_standings()).await {
        Ok(rows) => Json(rows).into_response(),
        Err(response) => response,
    }
}

pub async fn get_pairings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match run_blocking(&state.service, |service| service.swiss_pairings()).await {
        Ok(pairings) => Json(pairings).into_response(),
        Err(response) => response,
    }
}
