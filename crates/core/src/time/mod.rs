//! Time and geometry utilities for the scheduler grid.
//!
//! Everything in this module is a pure function: no hidden state, safe to
//! call from any number of callers.

mod clock;
mod dates;
mod error;
mod geometry;
mod id;

pub use clock::{
    format_time, format_time_to_12_hour, generate_time_slots, minutes_since_midnight,
    parse_time, time_to_minutes,
};
pub use dates::{day_name, format_date, get_week_days, today};
pub use error::TimeError;
pub use geometry::{calculate_event_height, calculate_event_position};
pub use id::generate_id;

/// Length of one grid slot in minutes.
pub const SLOT_MINUTES: u32 = 15;

/// First hour shown on the grid by default.
pub const DEFAULT_START_HOUR: u32 = 9;

/// Last hour shown on the grid by default (only its `:00` slot).
pub const DEFAULT_END_HOUR: u32 = 18;

/// Height of one slot in pixels.
pub const DEFAULT_SLOT_HEIGHT: f64 = 40.0;

/// Number of selectable days: the current week plus the following one.
pub const WEEK_DAYS_SPAN: usize = 14;
