//! venuegrid CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use venuegrid::cli::Cli;
use venuegrid::commands;
use venuegrid::storage::FileStorage;
use venuegrid::{Config, Scheduler};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "venuegrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    tracing::debug!(data_dir = %config.data_dir.display(), "Opening scheduler data");
    let storage = FileStorage::new(&config.data_dir);
    let mut scheduler = Scheduler::load(storage).context("Failed to load scheduler data")?;

    let output = commands::run(cli, &config, &mut scheduler)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
