use anyhow::{Context, Result};

use super::connection::DbConn;
use crate::swiss::{RankingOrder, RankingRow};

const SELECT_RANKINGS: &str = "SELECT id, name, wins, games FROM player_rankings";

fn order_clause(order: RankingOrder) -> &'static str {
    match order {
        RankingOrder::Wins => "ORDER BY wins DESC, id ASC",
        // Zero games divide to NULL, which SQLite sorts last when descending.
        RankingOrder::WinRatio => {
            "ORDER BY CAST(wins AS REAL) / NULLIF(games, 0) DESC, wins DESC, id ASC"
        }
    }
}

pub fn list_rankings(conn: &mut DbConn, order: RankingOrder) -> Result<Vec<RankingRow>> {
    let sql = format!("{SELECT_RANKINGS} {}", order_clause(order));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_ranking_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read rankings by {}", order.as_str()))?;

    Ok(rows)
}

fn parse_ranking_row(row: &rusqlite::Row) -> rusqlite::Result<RankingRow> {
    Ok(RankingRow {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        games: row.get(3)?,
    })
}
