//! CLI argument definitions and parsing.

pub mod args;


pub use args::{ConnectionArgs, FilterArgs, PlayerArgs};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(
    name = "premier-zone",
    about = "Search and manage Premier League player statistics"
)]
pub struct PremierZone {
    #[clap(flatten)]
    pub connection: ConnectionArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search players by name, team, position or nation.
    ///
    /// Only filters with a non-blank value are sent; with none at all the
    /// whole collection is listed.
    Search {
        #[clap(flatten)]
        filters: FilterArgs,

        /// Output results as JSON instead of player cards.
        #[clap(long)]
        json: bool,
    },

    /// List every player.
    List {
        /// Output results as JSON instead of player cards.
        #[clap(long)]
        json: bool,
    },

    /// Add a new player.
    Add {
        #[clap(flatten)]
        player: PlayerArgs,
    },

    /// Replace an existing player by ID.
    Update {
        /// ID of the player to replace.
        #[clap(long)]
        id: u64,

        #[clap(flatten)]
        player: PlayerArgs,
    },

    /// Delete a player by name.
    Delete {
        /// Exact player name.
        name: String,
    },

    /// Interactive search session reading commands from stdin.
    Browse,
}
