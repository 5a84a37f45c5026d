use chrono::NaiveTime;

use super::clock::minutes_since_midnight;
use super::SLOT_MINUTES;

/// Vertical offset in pixels of an event starting at `start`, measured from
/// the first slot of the grid.
///
/// Events starting before `first_slot` get a negative offset; clamping is
/// left to the renderer.
pub fn calculate_event_position(start: NaiveTime, first_slot: NaiveTime, slot_height: f64) -> f64 {
    let delta = minutes_since_midnight(start) - minutes_since_midnight(first_slot);
    slots_to_pixels(delta, slot_height)
}

/// Height in pixels of an event running from `start` to `end`.
///
/// Zero or negative for degenerate ranges; never clamped.
pub fn calculate_event_height(start: NaiveTime, end: NaiveTime, slot_height: f64) -> f64 {
    let duration = minutes_since_midnight(end) - minutes_since_midnight(start);
    slots_to_pixels(duration, slot_height)
}

fn slots_to_pixels(minutes: i64, slot_height: f64) -> f64 {
    (minutes as f64 / f64::from(SLOT_MINUTES)) * slot_height
}
