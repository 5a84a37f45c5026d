//! Pretty output formatting.

use chrono::{NaiveDate, NaiveTime};
use venuegrid_core::schedule::{DayLayout, Event, Venue};
use venuegrid_core::time::{day_name, format_date, format_time, format_time_to_12_hour};

/// Format a venue for display.
pub fn format_venue(venue: &Venue) -> String {
    format!("{}\n  ID: {}", venue.name, venue.id)
}

/// Format venues for display.
pub fn format_venues(venues: &[Venue]) -> String {
    if venues.is_empty() {
        return "No venues found.".to_string();
    }
    let mut output = format!("VENUES ({})\n", venues.len());
    output.push_str(&"-".repeat(40));
    for venue in venues {
        output.push_str(&format!("\n{}", format_venue(venue)));
        output.push('\n');
    }
    output
}

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Date: {}\n  Time: {} - {}\n  Venues: {}",
        event.title,
        event.id,
        event.date,
        format_time(event.start_time),
        format_time(event.end_time),
        event.venue_ids.join(", ")
    );
    if let Some(color) = &event.color {
        output.push_str(&format!("\n  Color: {}", color));
    }
    output
}

/// Format events for display.
pub fn format_events<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = &'a Event>,
{
    let events: Vec<&Event> = events.into_iter().collect();
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

/// Format a day layout, one block per venue column.
pub fn format_layout(layout: &DayLayout) -> String {
    let mut output = format!(
        "{} {} ({} slots, {}px)\n",
        day_name(layout.date),
        format_date(layout.date),
        layout.slots.len(),
        layout.grid_height
    );
    output.push_str(&"-".repeat(40));
    for column in &layout.columns {
        output.push_str(&format!("\n{} [{}]", column.venue.name, column.venue.id));
        if column.placements.is_empty() {
            output.push_str("\n  (free)");
        }
        for placement in &column.placements {
            output.push_str(&format!(
                "\n  {} - {}  {}  top={} height={} {}",
                placement.start_label,
                placement.end_label,
                placement.title,
                placement.top,
                placement.height,
                placement.color
            ));
        }
        output.push('\n');
    }
    output
}

/// Format the selectable days, marking `selected`.
pub fn format_days(days: &[NaiveDate], selected: NaiveDate) -> String {
    days.iter()
        .map(|day| {
            let marker = if *day == selected { "*" } else { " " };
            format!("{} {} {}", marker, &day_name(*day)[..3], format_date(*day))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the time slots of the grid.
pub fn format_slots(slots: &[NaiveTime]) -> String {
    if slots.is_empty() {
        return "No slots.".to_string();
    }
    slots
        .iter()
        .map(|slot| format!("{}  {}", format_time(*slot), format_time_to_12_hour(*slot)))
        .collect::<Vec<_>>()
        .join("\n")
}
