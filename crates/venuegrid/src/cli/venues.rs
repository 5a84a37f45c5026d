//! Venue CLI commands.

use clap::{Parser, Subcommand};

/// Venue management commands.
#[derive(Debug, Parser)]
pub struct VenuesCommand {
    #[command(subcommand)]
    pub action: VenuesAction,
}

/// Available venue actions.
#[derive(Debug, Subcommand)]
pub enum VenuesAction {
    /// List all venues.
    List,
    /// Create a venue.
    Add {
        /// Venue name.
        name: String,
    },
    /// Delete a venue. Events booked only there are deleted too.
    Delete {
        /// Venue ID.
        id: String,
    },
}
