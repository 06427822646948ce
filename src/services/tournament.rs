use anyhow::Result;
use log::{debug, info};

use crate::config::settings::AppConfig;
use crate::database::{self, DbConn, DbPool, Match, Player};
use crate::sanitize::Sanitizer;
use crate::swiss::{self, Pairing, PlayerId, RankingOrder, RankingRow};

/// Entry point for every tournament operation.
///
/// Holds no tournament state of its own: each call checks a connection out
/// of the pool, runs its statements and hands the connection back, so every
/// read sees whatever the store holds at that moment.
#[derive(Clone)]
pub struct TournamentService {
    pool: DbPool,
    sanitizer: Sanitizer,
}

impl TournamentService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database)?;
        let sanitizer = Sanitizer::new(config.sanitizer.allowed_tags.as_slice());
        Ok(Self::from_parts(pool, sanitizer))
    }

    pub fn from_parts(pool: DbPool, sanitizer: Sanitizer) -> Self {
        Self { pool, sanitizer }
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }

    pub fn initialize(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::setup::initialize_database(&mut conn)
    }

    pub fn reset(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::setup::reset_database(&mut conn)
    }

    pub fn delete_matches(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let removed = database::matches::delete_all(&mut conn)?;
        info!("Deleted {} matches", removed);
        Ok(())
    }

    /// Fails while matches still reference players; clear matches first.
    pub fn delete_players(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let removed = database::players::delete_all(&mut conn)?;
        info!("Deleted {} players", removed);
        Ok(())
    }

    pub fn count_players(&self) -> Result<i64> {
        let mut conn = self.connection()?;
        database::players::count_all(&mut conn)
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let clean_name = self.sanitizer.clean(name);
        if clean_name != name {
            debug!("Sanitized player name {:?} to {:?}", name, clean_name);
        }

        let mut conn = self.connection()?;
        let player = database::players::insert_player(&mut conn, &clean_name)?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut conn = self.connection()?;
        database::players::list_all(&mut conn)
    }

    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        let mut conn = self.connection()?;
        let recorded = database::matches::insert_match(&mut conn, winner, loser)?;
        info!("Recorded match {}: {} beat {}", recorded.id, winner, loser);
        Ok(recorded)
    }

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        let mut conn = self.connection()?;
        database::matches::list_all(&mut conn)
    }

    /// Every player with wins and games played, leader first.
    ///
    /// When the two leaders share the same nonzero win count the table is
    /// read again ordered by win ratio. The two reads are not atomic.
    pub fn player_standings(&self) -> Result<Vec<RankingRow>> {
        let mut conn = self.connection()?;
        let rows = database::rankings::list_rankings(&mut conn, RankingOrder::Wins)?;

        match swiss::follow_up_order(&rows) {
            Some(order) => {
                debug!("Leaders tied on {} wins, re-ranking by {}", rows[0].wins, order.as_str());
                database::rankings::list_rankings(&mut conn, order)
            }
            None => Ok(rows),
        }
    }

    /// Adjacent pairs from the win-ordered ranking. Never applies the
    /// win-ratio tie-break used by [`Self::player_standings`].
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let mut conn = self.connection()?;
        let rows = database::rankings::list_rankings(&mut conn, RankingOrder::Wins)?;
        let pairings = swiss::pair_adjacent(&rows);
        debug!("Paired {} players into {} pairings", rows.len(), pairings.len());
        Ok(pairings)
    }
}
