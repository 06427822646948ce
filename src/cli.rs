use clap::{Parser, Subcommand};

use crate::swiss::PlayerId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH, ":memory:" for a throwaway store)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the tables and ranking view if they are missing
    Init,
    /// Drop and recreate the whole schema
    Reset,
    /// Register a new player
    Register {
        /// Player's full name (markup outside the allow-list is stripped)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
    },
    /// Print the number of registered players
    Count,
    /// List registered players
    Players,
    /// List recorded matches
    Matches,
    /// Show the standings, leader first
    Standings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the pairings for the next round
    Pairings {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Remove every match record
    DeleteMatches,
    /// Remove every player record
    DeletePlayers,
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}
