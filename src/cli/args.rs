//! CLI argument definitions shared between commands.

use crate::{
    api::{ClientConfig, PlayerRecord, ResponsePolicy},
    core::{parse_header_arg, FilterCriteria},
    Result,
};
use clap::Args;

/// How to reach the backend; accepted before or after the subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// Player collection URL (or set `PREMIER_ZONE_BASE_URL` env var).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Extra request header (repeatable): `-H "X-Api-Key: abc"`.
    #[clap(long = "header", short = 'H', global = true)]
    pub headers: Vec<String>,

    /// Reject responses containing players with no name or negative stats.
    #[clap(long, global = true)]
    pub strict: bool,

    /// Serve searches from the built-in demo roster instead of the backend.
    #[clap(long, global = true)]
    pub offline: bool,
}

impl ConnectionArgs {
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::resolve(self.base_url.clone());
        for raw in &self.headers {
            let (name, value) = parse_header_arg(raw)?;
            config = config.with_header(name, value);
        }
        if self.strict {
            config = config.with_policy(ResponsePolicy::Strict);
        }
        Ok(config)
    }
}

/// Search filters: substring matches applied by the backend.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Player name.
    #[clap(long, short = 'n')]
    pub name: Option<String>,

    /// Team name.
    #[clap(long, short = 't')]
    pub team: Option<String>,

    /// Position, e.g. `FW` or `Forward`.
    #[clap(long, short = 'p')]
    pub position: Option<String>,

    /// Nationality.
    #[clap(long)]
    pub nation: Option<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            name: args.name,
            team: args.team,
            position: args.position,
            nation: args.nation,
        }
    }
}

/// Player fields for `add` and `update`.
#[derive(Debug, Clone, Default, Args)]
pub struct PlayerArgs {
    /// Player name.
    #[clap(long)]
    pub name: String,

    #[clap(long)]
    pub team: Option<String>,

    #[clap(long)]
    pub position: Option<String>,

    #[clap(long)]
    pub nation: Option<String>,

    #[clap(long)]
    pub age: Option<u32>,

    #[clap(long)]
    pub matches: Option<u32>,

    #[clap(long)]
    pub starts: Option<u32>,

    #[clap(long)]
    pub minutes: Option<f64>,

    #[clap(long)]
    pub goals: Option<f64>,

    #[clap(long)]
    pub assists: Option<f64>,

    #[clap(long)]
    pub penalty_goals: Option<f64>,

    #[clap(long)]
    pub yellow_cards: Option<f64>,

    #[clap(long)]
    pub red_cards: Option<f64>,

    /// Expected goals.
    #[clap(long)]
    pub xg: Option<f64>,

    /// Expected assists.
    #[clap(long)]
    pub xa: Option<f64>,
}

impl PlayerArgs {
    pub fn into_record(self, id: Option<u64>) -> PlayerRecord {
        PlayerRecord {
            id,
            name: self.name,
            team: self.team.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            nation: self.nation.unwrap_or_default(),
            age: self.age,
            matches_played: self.matches,
            starts: self.starts,
            minutes_played: self.minutes,
            goals: self.goals,
            assists: self.assists,
            penalty_goals: self.penalty_goals,
            yellow_cards: self.yellow_cards,
            red_cards: self.red_cards,
            expected_goals: self.xg,
            expected_assists: self.xa,
        }
    }
}
