//! Default data set used when nothing has been stored yet.
//!
//! This module contains pure functions; the date of the sample events is
//! passed in so callers and tests control it.

use chrono::{NaiveDate, NaiveTime};

use super::types::{Event, SchedulerData, Venue};

/// Color used by the renderer for events without one.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Palette offered when creating or editing an event.
pub const EVENT_COLORS: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Number of placeholder venues in the default catalog.
const DEFAULT_VENUE_COUNT: usize = 10;

/// The placeholder venue catalog: `venue-1` ("Venue 1") through `venue-10`.
pub fn default_venues() -> Vec<Venue> {
    (1..=DEFAULT_VENUE_COUNT)
        .map(|n| Venue::new(format!("venue-{n}"), format!("Venue {n}")))
        .collect()
}

/// Sample events spread across the first venues on `date`.
pub fn sample_events(date: NaiveDate) -> Vec<Event> {
    let time = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();

    let samples = [
        ("event-1", "Team Meeting", "venue-1", time(9, 0), time(10, 0), "#3b82f6"),
        ("event-2", "Workshop", "venue-2", time(9, 30), time(11, 0), "#10b981"),
        ("event-3", "Presentation", "venue-3", time(10, 0), time(10, 45), "#f59e0b"),
        ("event-4", "Training Session", "venue-1", time(11, 0), time(12, 30), "#ef4444"),
        ("event-5", "Lunch Meeting", "venue-4", time(12, 0), time(13, 0), "#8b5cf6"),
        ("event-6", "Client Call", "venue-5", time(14, 0), time(15, 30), "#ec4899"),
    ];

    samples
        .into_iter()
        .map(|(id, title, venue_id, start, end, color)| {
            Event::new(id, title, venue_id, date, start, end).with_color(color)
        })
        .collect()
}

/// The full default data set: placeholder venues plus sample events on `date`.
pub fn default_data(date: NaiveDate) -> SchedulerData {
    SchedulerData::new(sample_events(date), default_venues())
}
