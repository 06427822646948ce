use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::tournament::TournamentService;

pub mod matches;
pub mod players;
pub mod standings;

pub struct AppState {
    pub service: TournamentService,
}

/// Run a storage call off the async workers and turn failures into a 500.
pub(crate) async fn run_blocking<T, F>(service: &TournamentService, call: F) -> Result<T, Response>
where
    T: Send + 'static,
    F: FnOnce(&TournamentService) -> anyhow::Result<T> + Send + 'static,
{
    let service = service.clone();
    match tokio::task::spawn_blocking(move || call(&service)).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            log::error!("Request failed: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {:#}", e)).into_response())
        }
        Err(e) => {
            log::error!("Blocking task failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
    }
}
