//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use premier_zone::{cli::PremierZone, commands};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("premier_zone=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = PremierZone::parse();

    let mut stdout = std::io::stdout().lock();
    let ok = commands::run(app, &mut stdout).await?;
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
