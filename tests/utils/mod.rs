use swiss_tournament::config::settings::{AppConfig, DatabaseSettings, SanitizerSettings};
use swiss_tournament::database::Player;
use swiss_tournament::services::TournamentService;

pub fn memory_config() -> AppConfig {
    AppConfig {
        database: DatabaseSettings::in_memory(),
        sanitizer: SanitizerSettings::default(),
    }
}

/// A service backed by a fresh in-memory database with the schema in place.
pub fn fresh_service() -> TournamentService {
    let service = TournamentService::new(&memory_config()).expect("service should open");
    service.initialize().expect("schema should be created");
    service
}

#[allow(dead_code)]
pub fn register_all(service: &TournamentService, names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .map(|name| service.register_player(name).expect("registration should succeed"))
        .collect()
}
