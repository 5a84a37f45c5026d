//! Event CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use venuegrid_core::time::parse_time;

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List events.
    List {
        /// Only events on this date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Only events whose primary venue is this one.
        #[arg(long)]
        venue: Option<String>,
    },
    /// Create an event.
    Add {
        /// Event title.
        #[arg(long)]
        title: String,
        /// Venue ID; repeat for multi-venue events. The first one is primary.
        #[arg(long = "venue", required = true)]
        venues: Vec<String>,
        /// Date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:mm).
        #[arg(long, value_parser = parse_time)]
        start: NaiveTime,
        /// End time (HH:mm).
        #[arg(long, value_parser = parse_time)]
        end: NaiveTime,
        /// Accent color (#RRGGBB).
        #[arg(long)]
        color: Option<String>,
    },
    /// Update an event. Only the given fields change.
    Update {
        /// Event ID.
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New venue list; repeat for multi-venue events.
        #[arg(long = "venue")]
        venues: Vec<String>,
        /// New date (YYYY-MM-DD).
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New start time (HH:mm).
        #[arg(long, value_parser = parse_time)]
        start: Option<NaiveTime>,
        /// New end time (HH:mm).
        #[arg(long, value_parser = parse_time)]
        end: Option<NaiveTime>,
        /// New accent color.
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete an event.
    Delete {
        /// Event ID.
        id: String,
    },
}
