use serde::{Deserialize, Serialize};

use crate::swiss::PlayerId;

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportMatchRequest {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerCount {
    pub count: i64,
}
