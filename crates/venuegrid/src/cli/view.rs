//! Read-only grid views.

use chrono::NaiveDate;
use clap::Args;

/// Arguments for `grid`.
#[derive(Debug, Args)]
pub struct GridArgs {
    /// Day to lay out (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Slot height in pixels. Defaults to the configured value.
    #[arg(long)]
    pub slot_height: Option<f64>,
}

/// Arguments for `days`.
#[derive(Debug, Args)]
pub struct DaysArgs {
    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for `slots`.
#[derive(Debug, Args)]
pub struct SlotsArgs {
    /// First hour. Defaults to the configured value.
    #[arg(long)]
    pub start_hour: Option<u32>,
    /// Last hour. Defaults to the configured value.
    #[arg(long)]
    pub end_hour: Option<u32>,
}
