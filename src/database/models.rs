use chrono::NaiveDateTime;
use serde::Serialize;

use crate::swiss::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub registered_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub reported_at: NaiveDateTime,
}
