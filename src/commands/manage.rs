//! `add`, `update` and `delete`.

use crate::{api::ApiClient, api::PlayerRecord, render::render_card, Result};
use std::io::Write;

pub async fn handle_add<W: Write>(
    client: &ApiClient,
    player: PlayerRecord,
    out: &mut W,
) -> Result<PlayerRecord> {
    let created = client.create(&player).await?;
    match created.id {
        Some(id) => writeln!(out, "✓ Added player {id}")?,
        None => writeln!(out, "✓ Added player")?,
    }
    write!(out, "{}", render_card(&created))?;
    Ok(created)
}

pub async fn handle_update<W: Write>(
    client: &ApiClient,
    player: PlayerRecord,
    out: &mut W,
) -> Result<PlayerRecord> {
    let updated = client.update(&player).await?;
    writeln!(out, "✓ Updated player {}", updated.name)?;
    write!(out, "{}", render_card(&updated))?;
    Ok(updated)
}

pub async fn handle_delete<W: Write>(client: &ApiClient, name: &str, out: &mut W) -> Result<()> {
    client.delete_by_name(name).await?;
    writeln!(out, "✓ Deleted player {name}")?;
    Ok(())
}
