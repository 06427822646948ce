//! Output formatting: terminal tables and JSON.
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::database::{Match, Player};
use crate::swiss::{Pairing, RankingRow};

fn name_width<'a>(names: impl Iterator<Item = &'a str>, header: &str) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0).max(header.len())
}

pub fn standings_lines(rows: &[RankingRow]) -> Vec<String> {
    let width = name_width(rows.iter().map(|r| r.name.as_str()), "Name");

    let mut lines = vec![
        format!(" # | {:>4} | {:<width$} | Wins | Games", "Id", "Name"),
        format!("---|------|-{}-|------|------", "-".repeat(width)),
    ];
    for (i, row) in rows.iter().enumerate() {
        lines.push(format!(
            "{:>2} | {:>4} | {:<width$} | {:>4} | {:>5}",
            i + 1,
            row.id,
            row.name,
            row.wins,
            row.games,
        ));
    }
    lines
}

pub fn pairing_lines(pairings: &[Pairing]) -> Vec<String> {
    let width = name_width(pairings.iter().map(|p| p.name1.as_str()), "Player");

    let mut lines = vec![
        format!("Table | {:>4} | {:<width$} | {:>4} | Player", "Id", "Player", "Id"),
        format!("------|------|-{}-|------|-------", "-".repeat(width)),
    ];
    for (i, pairing) in pairings.iter().enumerate() {
        lines.push(format!(
            "{:>5} | {:>4} | {:<width$} | {:>4} | {}",
            i + 1,
            pairing.id1,
            pairing.name1,
            pairing.id2,
            pairing.name2,
        ));
    }
    lines
}

fn print_lines(lines: Vec<String>) {
    for (i, line) in lines.into_iter().enumerate() {
        if i == 0 {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
}

pub fn print_standings(rows: &[RankingRow]) {
    print_lines(standings_lines(rows));
    println!("\n{} players", rows.len());
}

pub fn print_pairings(pairings: &[Pairing]) {
    if pairings.is_empty() {
        println!("{}", "No pairings (player count must be even and nonzero)".yellow());
        return;
    }
    print_lines(pairing_lines(pairings));
}

pub fn print_players(players: &[Player]) {
    for player in players {
        println!("{:>4}  {}  {}", player.id, player.registered_at, player.name);
    }
}

pub fn print_matches(matches: &[Match]) {
    for recorded in matches {
        println!(
            "{:>4}  {}  {} beat {}",
            recorded.id, recorded.reported_at, recorded.winner, recorded.loser
        );
    }
}

/// Print any result as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
