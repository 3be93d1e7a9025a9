//! Command implementations for the Premier Zone CLI

pub mod browse;
pub mod common;
pub mod manage;
pub mod search;

use crate::{
    cli::{Commands, PremierZone},
    core::FilterCriteria,
    Result,
};
use common::Backend;
use std::io::Write;

/// Dispatch a parsed command line. Returns `false` when the command ran but
/// ended in a user-visible failure (the search view's error state).
pub async fn run<W: Write>(app: PremierZone, out: &mut W) -> Result<bool> {
    let backend = Backend::connect(&app.connection)?;

    match app.command {
        Commands::Search { filters, json } => {
            search::handle_search(backend, FilterCriteria::from(filters), json, out).await
        }
        Commands::List { json } => {
            search::handle_search(backend, FilterCriteria::default(), json, out).await
        }
        Commands::Add { player } => {
            manage::handle_add(backend.client()?, player.into_record(None), out).await?;
            Ok(true)
        }
        Commands::Update { id, player } => {
            manage::handle_update(backend.client()?, player.into_record(Some(id)), out).await?;
            Ok(true)
        }
        Commands::Delete { name } => {
            manage::handle_delete(backend.client()?, &name, out).await?;
            Ok(true)
        }
        Commands::Browse => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            browse::handle_browse(backend, stdin, out).await?;
            Ok(true)
        }
    }
}
