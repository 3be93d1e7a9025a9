//! Built-in demo roster for previews without a running backend.
//!
//! [`DemoSource`] answers searches the way the backend does: each active
//! field is a case-insensitive substring match on the matching record field,
//! and every active field has to match.

use crate::{
    api::PlayerRecord,
    core::{FilterCriteria, FilterField},
    search::PlayerSource,
    Result,
};
use std::future::{ready, Future};

#[derive(Debug, Clone)]
pub struct DemoSource {
    players: Vec<PlayerRecord>,
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new(demo_players())
    }
}

impl DemoSource {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Players matching every active field, in roster order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<PlayerRecord> {
        self.players
            .iter()
            .filter(|player| matches(player, criteria))
            .cloned()
            .collect()
    }
}

fn matches(player: &PlayerRecord, criteria: &FilterCriteria) -> bool {
    FilterField::ALL.iter().all(|field| {
        let Some(wanted) = criteria.active(*field) else {
            return true;
        };
        let value = match field {
            FilterField::Name => &player.name,
            FilterField::Team => &player.team,
            FilterField::Position => &player.position,
            FilterField::Nation => &player.nation,
        };
        value.to_lowercase().contains(&wanted.to_lowercase())
    })
}

impl PlayerSource for DemoSource {
    fn search(
        &self,
        criteria: &FilterCriteria,
    ) -> impl Future<Output = Result<Vec<PlayerRecord>>> + Send {
        ready(Ok(self.filter(criteria)))
    }
}

fn demo(
    id: u64,
    name: &str,
    team: &str,
    position: &str,
    nation: &str,
    (goals, assists, matches): (f64, f64, u32),
) -> PlayerRecord {
    PlayerRecord {
        id: Some(id),
        goals: Some(goals),
        assists: Some(assists),
        matches_played: Some(matches),
        ..PlayerRecord::new(name, team, position, nation)
    }
}

pub fn demo_players() -> Vec<PlayerRecord> {
    vec![
        demo(1, "Erling Haaland", "Manchester City", "Forward", "Norway", (27.0, 5.0, 31)),
        demo(2, "Mohamed Salah", "Liverpool", "Forward", "Egypt", (18.0, 10.0, 32)),
        demo(3, "Kevin De Bruyne", "Manchester City", "Midfielder", "Belgium", (7.0, 16.0, 28)),
        demo(4, "Bukayo Saka", "Arsenal", "Forward", "England", (14.0, 11.0, 35)),
        demo(5, "Bruno Fernandes", "Manchester United", "Midfielder", "Portugal", (8.0, 8.0, 34)),
        demo(6, "Cole Palmer", "Chelsea", "Midfielder", "England", (22.0, 11.0, 34)),
        demo(7, "Son Heung-min", "Tottenham", "Forward", "South Korea", (17.0, 10.0, 35)),
        demo(8, "Virgil van Dijk", "Liverpool", "Defender", "Netherlands", (2.0, 1.0, 33)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{FetchState, SearchController};

    #[test]
    fn test_demo_roster() {
        let source = DemoSource::default();
        assert_eq!(source.players().len(), 8);
        assert!(source.players().iter().all(|p| p.validate().is_ok()));
    }

    #[test]
    fn test_empty_criteria_returns_everyone() {
        let source = DemoSource::default();
        assert_eq!(source.filter(&FilterCriteria::default()).len(), 8);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let source = DemoSource::default();
        let found = source.filter(&FilterCriteria::by_name("  SAKA "));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Bukayo Saka");
    }

    #[test]
    fn test_filter_requires_every_active_field() {
        let source = DemoSource::default();
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Team, "manchester");
        criteria.set(FilterField::Position, "mid");

        let names: Vec<_> = source
            .filter(&criteria)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Kevin De Bruyne", "Bruno Fernandes"]);
    }

    #[test]
    fn test_filter_no_match() {
        let source = DemoSource::default();
        let criteria = FilterCriteria {
            nation: Some("Brazil".to_string()),
            ..FilterCriteria::default()
        };
        assert!(source.filter(&criteria).is_empty());
    }

    #[tokio::test]
    async fn test_demo_source_drives_controller() {
        let mut controller = SearchController::new(DemoSource::default());
        controller.set_field(FilterField::Position, "Forward");

        let state = controller.search().await;
        assert!(matches!(state, FetchState::Success(records) if records.len() == 4));
    }
}
