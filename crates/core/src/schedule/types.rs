use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// A column of the grid that events can be booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
}

impl Venue {
    /// Creates a venue with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A titled time interval on one date, booked against one or more venues.
///
/// The venue list is the single source of truth for where an event is shown;
/// the primary venue is always its first element. The persisted form still
/// carries a separate `venueId` field for older single-venue readers, see
/// [`EventRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub venue_ids: Vec<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Accent color (CSS color value). The renderer picks a default when unset.
    pub color: Option<String>,
}

impl Event {
    /// Creates an event booked against a single venue.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        venue_id: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            venue_ids: vec![venue_id.into()],
            date,
            start_time,
            end_time,
            color: None,
        }
    }

    /// Replaces the venue list.
    pub fn with_venues<I, V>(mut self, venue_ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.venue_ids = venue_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the accent color for this event.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The primary venue, i.e. the first entry of the venue list.
    pub fn primary_venue_id(&self) -> Option<&str> {
        self.venue_ids.first().map(String::as_str)
    }

    /// Returns true if the event is booked against the given venue.
    pub fn occupies(&self, venue_id: &str) -> bool {
        self.venue_ids.iter().any(|id| id == venue_id)
    }
}

/// Persisted shape of an [`Event`].
///
/// `venueId` duplicates the first element of `venueIds`. On read a non-empty
/// `venueIds` wins; records written before multi-venue support only carry
/// `venueId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    id: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    venue_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    venue_ids: Option<Vec<String>>,
    date: NaiveDate,
    #[serde(
        serialize_with = "crate::serde::serialize_hhmm",
        deserialize_with = "crate::serde::deserialize_hhmm"
    )]
    start_time: NaiveTime,
    #[serde(
        serialize_with = "crate::serde::serialize_hhmm",
        deserialize_with = "crate::serde::deserialize_hhmm"
    )]
    end_time: NaiveTime,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    color: Option<String>,
}

impl TryFrom<EventRecord> for Event {
    type Error = RecordError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let venue_ids = match (record.venue_ids, record.venue_id) {
            (Some(ids), _) if !ids.is_empty() => ids,
            (_, Some(id)) => vec![id],
            _ => return Err(RecordError::NoVenue(record.id)),
        };

        Ok(Self {
            id: record.id,
            title: record.title,
            venue_ids,
            date: record.date,
            start_time: record.start_time,
            end_time: record.end_time,
            color: record.color,
        })
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        let venue_id = event.venue_ids.first().cloned();
        let venue_ids = (!event.venue_ids.is_empty()).then_some(event.venue_ids);

        Self {
            id: event.id,
            title: event.title,
            venue_id,
            venue_ids,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            color: event.color,
        }
    }
}

/// The aggregate root: every event and venue. This is the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerData {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub venues: Vec<Venue>,
}

impl SchedulerData {
    /// Creates a data set from events and venues.
    pub fn new(events: Vec<Event>, venues: Vec<Venue>) -> Self {
        Self { events, venues }
    }

    /// Looks up an event by id.
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Looks up a venue by id.
    pub fn venue(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    /// Returns true if any event or venue already uses `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.event(id).is_some() || self.venue(id).is_some()
    }
}

/// A change applied to the scheduler data, published to subscribers after
/// it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulerChange {
    EventAdded {
        event: Event,
    },
    EventUpdated {
        event: Event,
    },
    EventDeleted {
        id: String,
    },
    VenueAdded {
        venue: Venue,
    },
    VenueDeleted {
        id: String,
        /// Events removed because this was their last venue.
        removed_events: Vec<String>,
        /// Events that lost this venue but still have others.
        updated_events: Vec<String>,
    },
}

impl SchedulerChange {
    pub fn event_added(event: Event) -> Self {
        Self::EventAdded { event }
    }

    pub fn event_updated(event: Event) -> Self {
        Self::EventUpdated { event }
    }

    pub fn event_deleted(id: impl Into<String>) -> Self {
        Self::EventDeleted { id: id.into() }
    }

    pub fn venue_added(venue: Venue) -> Self {
        Self::VenueAdded { venue }
    }
}
