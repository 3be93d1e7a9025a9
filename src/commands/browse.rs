//! Interactive search session.
//!
//! Mounts a controller, then reads one command per line:
//!
//! ```text
//! set <field> <value>   edit a filter (name, team, position, nation)
//! unset <field>         empty a filter
//! search                run a search with the current filters
//! clear                 reset all filters and reload
//! show                  print filters and the current view
//! help                  list commands
//! quit                  leave the session
//! ```
//!
//! Editing never fetches. The loading line is printed when a fetch starts
//! and the view again once it completes.

use crate::{
    core::FilterField,
    render::render_view,
    search::{PendingFetch, PlayerSource, SearchController},
    ApiError, Result,
};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "commands: set <field> <value> | unset <field> | search | clear | show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Set(FilterField, String),
    Unset(FilterField),
    Search,
    Clear,
    Show,
    Help,
    Quit,
}

/// Parse one input line; blank lines yield `None`.
pub fn parse_browse_command(line: &str) -> Result<Option<BrowseCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));

    let command = match verb.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(ApiError::validation("usage: set <field> <value>"));
            }
            BrowseCommand::Set(field.parse()?, value.to_string())
        }
        "unset" => BrowseCommand::Unset(rest.parse()?),
        "search" | "s" => BrowseCommand::Search,
        "clear" | "c" => BrowseCommand::Clear,
        "show" => BrowseCommand::Show,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => return Err(ApiError::validation(format!("unknown command: {other}"))),
    };
    Ok(Some(command))
}

pub async fn handle_browse<S, R, W>(source: S, input: R, out: &mut W) -> Result<()>
where
    S: PlayerSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut controller = SearchController::new(source);
    if let Some(fetch) = controller.begin_mount() {
        run_fetch(&mut controller, fetch, out).await?;
    }
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_browse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match command {
            BrowseCommand::Set(field, value) => controller.set_field(field, value),
            BrowseCommand::Unset(field) => controller.set_field(field, ""),
            BrowseCommand::Search => {
                let fetch = controller.begin_search();
                run_fetch(&mut controller, fetch, out).await?;
            }
            BrowseCommand::Clear => {
                let fetch = controller.begin_clear();
                run_fetch(&mut controller, fetch, out).await?;
            }
            BrowseCommand::Show => {
                for field in FilterField::ALL {
                    let value = controller.criteria().get(field).unwrap_or("");
                    writeln!(out, "  {field}: {value}")?;
                }
                write!(out, "{}", render_view(controller.state(), controller.criteria()))?;
            }
            BrowseCommand::Help => writeln!(out, "{HELP}")?,
            BrowseCommand::Quit => break,
        }
    }
    out.flush()?;
    Ok(())
}

async fn run_fetch<S, W>(
    controller: &mut SearchController<S>,
    fetch: PendingFetch,
    out: &mut W,
) -> Result<()>
where
    S: PlayerSource,
    W: Write,
{
    write!(out, "{}", render_view(controller.state(), controller.criteria()))?;
    let result = controller.source().search(&fetch.criteria).await;
    controller.complete(fetch.ticket, result);
    write!(out, "{}", render_view(controller.state(), controller.criteria()))?;
    Ok(())
}
