//! `search` and `list`: one pass through the search controller, then render.

use crate::{
    core::{FilterCriteria, FilterField},
    render::render_view,
    search::{FetchState, PlayerSource, SearchController},
    Result,
};
use serde_json::json;
use std::io::Write;

/// Run a single search and write the rendered view.
///
/// With no active filter this is the initial "show all" load. Returns
/// `false` when the view ended in the error state.
pub async fn handle_search<S, W>(
    source: S,
    criteria: FilterCriteria,
    as_json: bool,
    out: &mut W,
) -> Result<bool>
where
    S: PlayerSource,
    W: Write,
{
    let mut controller = SearchController::new(source);
    for field in FilterField::ALL {
        if let Some(value) = criteria.get(field) {
            controller.set_field(field, value);
        }
    }

    if controller.has_active_filters() {
        controller.search().await;
    } else {
        controller.mount().await;
    }

    write_state(controller.state(), controller.criteria(), as_json, out)?;
    Ok(!matches!(controller.state(), FetchState::Error(_)))
}

pub fn write_state<W: Write>(
    state: &FetchState,
    criteria: &FilterCriteria,
    as_json: bool,
    out: &mut W,
) -> Result<()> {
    if !as_json {
        write!(out, "{}", render_view(state, criteria))?;
        return Ok(());
    }

    match state {
        FetchState::Success(records) => {
            writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
        }
        FetchState::Error(message) => {
            writeln!(out, "{}", json!({ "error": message }))?;
        }
        FetchState::Idle | FetchState::Loading => {}
    }
    Ok(())
}
