//! Plain-text rendering of the player search view.
//!
//! Given a [`FetchState`] and the current filters, exactly one of these is
//! produced: a loading line, an empty state, an error banner, or the
//! results line followed by one card per player.

use crate::{
    api::PlayerRecord,
    core::FilterCriteria,
    search::FetchState,
};
use std::fmt::Write;

pub const LOADING: &str = "Loading players...";

const NO_DATA_TITLE: &str = "No players available";
const NO_DATA_BODY: &str =
    "There are no players in the database yet. Make sure your backend server is running.";
const NO_MATCH_TITLE: &str = "No players found";
const NO_MATCH_BODY: &str = "We couldn't find any players matching your search criteria. \
Try adjusting your filters or search terms.";
const CLEAR_HINT: &str = "Use `clear` to reset all filters.";

/// Render the whole view for one state.
pub fn render_view(state: &FetchState, criteria: &FilterCriteria) -> String {
    let has_filters = criteria.has_active_filters();
    match state {
        FetchState::Idle => String::new(),
        FetchState::Loading => format!("{LOADING}\n"),
        FetchState::Error(message) => render_error(message),
        FetchState::Success(records) if records.is_empty() => render_empty(has_filters),
        FetchState::Success(records) => {
            let mut out = results_line(records.len(), has_filters);
            out.push('\n');
            for player in records {
                out.push('\n');
                out.push_str(&render_card(player));
            }
            out
        }
    }
}

pub fn render_error(message: &str) -> String {
    format!("Connection Error\n  {message}\n")
}

pub fn render_empty(has_filters: bool) -> String {
    if has_filters {
        format!("{NO_MATCH_TITLE}\n  {NO_MATCH_BODY}\n  {CLEAR_HINT}\n")
    } else {
        format!("{NO_DATA_TITLE}\n  {NO_DATA_BODY}\n")
    }
}

/// `Showing N player(s)`, plus ` matching your filters` when any are active.
pub fn results_line(count: usize, has_filters: bool) -> String {
    let plural = if count == 1 { "" } else { "s" };
    let suffix = if has_filters { " matching your filters" } else { "" };
    format!("Showing {count} player{plural}{suffix}")
}

fn int_or_dash(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Whole numbers print without decimals; unknown values print as `-`.
fn num_or_dash(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) if v.is_finite() => format!("{v:.1}"),
        Some(_) | None => "-".to_string(),
    }
}

fn text_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// One player summary card.
pub fn render_card(player: &PlayerRecord) -> String {
    let minutes = match player.minutes_played {
        Some(m) if m.is_finite() => format!("{}", m.round()),
        _ => "-".to_string(),
    };

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", text_or_dash(&player.name));
    let _ = writeln!(
        out,
        "  {} · {} yrs",
        text_or_dash(&player.position),
        int_or_dash(player.age)
    );
    let _ = writeln!(
        out,
        "  Team: {:<24} Nation: {}",
        text_or_dash(&player.team),
        text_or_dash(&player.nation)
    );
    let _ = writeln!(
        out,
        "  Matches {:>4}  Starts {:>4}  Minutes {:>6}",
        int_or_dash(player.matches_played),
        int_or_dash(player.starts),
        minutes
    );
    let _ = writeln!(
        out,
        "  Goals   {:>4}  Assists {:>3}  xG {:>6}",
        num_or_dash(player.goals),
        num_or_dash(player.assists),
        num_or_dash(player.expected_goals)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::FilterField, search::FETCH_ERROR_MESSAGE};

    fn haaland() -> PlayerRecord {
        PlayerRecord {
            id: Some(1),
            age: Some(23),
            matches_played: Some(31),
            starts: Some(29),
            minutes_played: Some(2552.4),
            goals: Some(27.0),
            assists: Some(5.0),
            expected_goals: Some(29.24),
            ..PlayerRecord::new("Erling Haaland", "Manchester City", "FW", "NOR")
        }
    }

    fn filtered() -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Position, "FW");
        criteria
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(render_view(&FetchState::Idle, &FilterCriteria::default()), "");
    }

    #[test]
    fn test_loading_renders_only_indicator() {
        let out = render_view(&FetchState::Loading, &filtered());
        assert_eq!(out, "Loading players...\n");
    }

    #[test]
    fn test_error_renders_banner_with_message() {
        let out = render_view(
            &FetchState::Error(FETCH_ERROR_MESSAGE.to_string()),
            &FilterCriteria::default(),
        );
        assert!(out.starts_with("Connection Error"));
        assert!(out.contains("unable to reach backend"));
        assert!(!out.contains("Showing"));
    }

    #[test]
    fn test_empty_without_filters() {
        let out = render_view(&FetchState::Success(vec![]), &FilterCriteria::default());
        assert!(out.contains("No players available"));
        assert!(!out.contains("clear"));
    }

    #[test]
    fn test_empty_with_filters() {
        let out = render_view(&FetchState::Success(vec![]), &filtered());
        assert!(out.contains("No players found"));
        assert!(out.contains("`clear`"));
    }

    #[test]
    fn test_results_line() {
        assert_eq!(results_line(1, false), "Showing 1 player");
        assert_eq!(results_line(2, false), "Showing 2 players");
        assert_eq!(results_line(2, true), "Showing 2 players matching your filters");
    }

    #[test]
    fn test_success_renders_count_and_cards() {
        let salah = PlayerRecord::new("Mohamed Salah", "Liverpool", "FW", "EGY");
        let out = render_view(&FetchState::Success(vec![haaland(), salah]), &filtered());

        assert!(out.starts_with("Showing 2 players matching your filters\n"));
        let haaland_at = out.find("Erling Haaland").unwrap();
        let salah_at = out.find("Mohamed Salah").unwrap();
        assert!(haaland_at < salah_at);
    }

    #[test]
    fn test_card_formats_known_values() {
        let card = render_card(&haaland());
        assert!(card.starts_with("Erling Haaland\n"));
        assert!(card.contains("FW · 23 yrs"));
        assert!(card.contains("Manchester City"));
        assert!(card.contains("Nation: NOR"));
        assert!(card.contains("Minutes   2552"));
        assert!(card.contains("Goals     27"));
        assert!(card.contains("xG   29.2"));
    }

    #[test]
    fn test_card_marks_unknown_values() {
        let card = render_card(&PlayerRecord::default());
        assert!(card.starts_with("-\n"));
        assert!(card.contains("- · - yrs"));
        assert!(card.contains("Matches    -"));
        assert!(!card.contains("NaN"));
    }

    #[test]
    fn test_num_or_dash() {
        assert_eq!(num_or_dash(None), "-");
        assert_eq!(num_or_dash(Some(3.0)), "3");
        assert_eq!(num_or_dash(Some(0.46)), "0.5");
        assert_eq!(num_or_dash(Some(f64::INFINITY)), "-");
    }
}
