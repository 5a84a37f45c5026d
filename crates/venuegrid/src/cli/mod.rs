//! CLI command definitions.

pub mod events;
pub mod venues;
pub mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Weekly venue scheduler.
#[derive(Debug, Parser)]
#[command(name = "venuegrid")]
#[command(version, about = "Weekly venue scheduler", long_about = None)]
pub struct Cli {
    /// Directory holding the scheduler data.
    #[arg(long, env = "VENUEGRID_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Venue management.
    Venues(venues::VenuesCommand),
    /// Event management.
    Events(events::EventsCommand),
    /// Show the grid layout of a day.
    Grid(view::GridArgs),
    /// List the selectable days around a date.
    Days(view::DaysArgs),
    /// List the time slots of the grid.
    Slots(view::SlotsArgs),
}
