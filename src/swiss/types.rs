use serde::{Deserialize, Serialize};

pub type PlayerId = i32;

/// One row of the ranking view: a player's cumulative record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub games: i32,
}

/// Two players drawn against each other for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn from_rows(first: &RankingRow, second: &RankingRow) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingOrder {
    /// Wins descending, registration order among equals.
    Wins,
    /// Wins per game descending, players without games last.
    WinRatio,
}

impl RankingOrder {
    pub fn as_str(&self) -> &str {
        match self {
            RankingOrder::Wins => "wins",
            RankingOrder::WinRatio => "win-ratio",
        }
    }
}
