pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod output;
pub mod sanitize;
pub mod services;
pub mod swiss;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::services::tournament::TournamentService;
use crate::swiss::PlayerId;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(cli: &Cli) -> AppConfig {
    AppConfig::new().with_database_path(cli.database.as_deref())
}

fn open_service(config: &AppConfig) -> Result<TournamentService> {
    let service = TournamentService::new(config)?;
    service.initialize()?;
    Ok(service)
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    open_service(config)?;
    println!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_reset(config: &AppConfig) -> Result<()> {
    let service = TournamentService::new(config)?;
    service.reset()?;
    println!("Database reset at {}", config.database.path);
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let player = open_service(config)?.register_player(name)?;
    println!("Registered player {} ({})", player.id, player.name);
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner: PlayerId, loser: PlayerId) -> Result<()> {
    let recorded = open_service(config)?.report_match(winner, loser)?;
    println!("Recorded match {}: {} beat {}", recorded.id, recorded.winner, recorded.loser);
    Ok(())
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    println!("{}", open_service(config)?.count_players()?);
    Ok(())
}

pub fn handle_players(config: &AppConfig) -> Result<()> {
    output::print_players(&open_service(config)?.list_players()?);
    Ok(())
}

pub fn handle_matches(config: &AppConfig) -> Result<()> {
    output::print_matches(&open_service(config)?.list_matches()?);
    Ok(())
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let rows = open_service(config)?.player_standings()?;
    if json {
        output::print_json(&rows)
    } else {
        output::print_standings(&rows);
        Ok(())
    }
}

pub fn handle_pairings(config: &AppConfig, json: bool) -> Result<()> {
    let pairings = open_service(config)?.swiss_pairings()?;
    if json {
        output::print_json(&pairings)
    } else {
        output::print_pairings(&pairings);
        Ok(())
    }
}

pub fn handle_delete_matches(config: &AppConfig) -> Result<()> {
    open_service(config)?.delete_matches()?;
    println!("All matches deleted");
    Ok(())
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    open_service(config)?.delete_players()?;
    println!("All players deleted");
    Ok(())
}
