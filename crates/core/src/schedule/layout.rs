//! Grid layout for a single day: one column per venue, one row per slot.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::mock_data::DEFAULT_EVENT_COLOR;
use super::operations::events_in_column;
use super::types::{Event, SchedulerData, Venue};
use crate::time::{
    calculate_event_height, calculate_event_position, format_time_to_12_hour,
    generate_time_slots, DEFAULT_END_HOUR, DEFAULT_SLOT_HEIGHT, DEFAULT_START_HOUR,
};

/// Shape of the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_height: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            slot_height: DEFAULT_SLOT_HEIGHT,
        }
    }
}

impl GridSpec {
    /// The slots of the time axis.
    pub fn slots(&self) -> Vec<NaiveTime> {
        generate_time_slots(self.start_hour, self.end_hour)
    }

    /// Time of the first row; 09:00 when the axis is empty.
    pub fn first_slot(&self) -> NaiveTime {
        self.slots()
            .first()
            .copied()
            .or_else(|| NaiveTime::from_hms_opt(DEFAULT_START_HOUR, 0, 0))
            .unwrap_or_default()
    }
}

/// Where an event card sits inside its venue column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPlacement {
    pub event_id: String,
    pub title: String,
    pub top: f64,
    pub height: f64,
    pub start_label: String,
    pub end_label: String,
    pub color: String,
}

impl EventPlacement {
    /// Places `event` on a grid starting at `first_slot`.
    pub fn for_event(event: &Event, first_slot: NaiveTime, slot_height: f64) -> Self {
        Self {
            event_id: event.id.clone(),
            title: event.title.clone(),
            top: calculate_event_position(event.start_time, first_slot, slot_height),
            height: calculate_event_height(event.start_time, event.end_time, slot_height),
            start_label: format_time_to_12_hour(event.start_time),
            end_label: format_time_to_12_hour(event.end_time),
            color: event
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_EVENT_COLOR.to_string()),
        }
    }

    /// Height to draw with, never below `min_height`.
    pub fn display_height(&self, min_height: f64) -> f64 {
        self.height.max(min_height)
    }
}

/// One venue column of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueColumn {
    pub venue: Venue,
    pub placements: Vec<EventPlacement>,
}

/// Layout of every venue column for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    #[serde(serialize_with = "crate::serde::serialize_hhmm_list")]
    pub slots: Vec<NaiveTime>,
    pub grid_height: f64,
    pub columns: Vec<VenueColumn>,
}

/// Lays out every event of `date` under each venue it is booked against.
///
/// A multi-venue event appears once in each of its columns. Geometry is not
/// clamped, so events outside the axis get offsets outside `0..grid_height`.
pub fn layout_day(data: &SchedulerData, date: NaiveDate, spec: &GridSpec) -> DayLayout {
    let slots = spec.slots();
    let first_slot = spec.first_slot();

    let columns = data
        .venues
        .iter()
        .map(|venue| VenueColumn {
            venue: venue.clone(),
            placements: events_in_column(&data.events, date, &venue.id)
                .into_iter()
                .map(|event| EventPlacement::for_event(event, first_slot, spec.slot_height))
                .collect(),
        })
        .collect();

    DayLayout {
        date,
        grid_height: slots.len() as f64 * spec.slot_height,
        slots,
        columns,
    }
}
