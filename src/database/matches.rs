use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Match;
use crate::swiss::PlayerId;

pub fn insert_match(conn: &mut DbConn, winner: PlayerId, loser: PlayerId) -> Result<Match> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id, winner, loser, reported_at";

    conn.query_row(sql, params![winner, loser], parse_match_row)
        .with_context(|| format!("Failed to insert match {winner} beat {loser}"))
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
        reported_at: row.get(3)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT id, winner, loser, reported_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}
