use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::types::Event;

/// Everything needed to create an event except its id.
///
/// No field is validated here; callers are expected to pass a trimmed,
/// non-empty title and at least one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub venue_ids: Vec<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EventDraft {
    /// Creates a draft booked against a single venue.
    pub fn new(
        title: impl Into<String>,
        venue_id: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
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

    /// Sets the accent color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Turns the draft into an event with the given id.
    pub fn into_event(self, id: impl Into<String>) -> Event {
        Event {
            id: id.into(),
            title: self.title,
            venue_ids: self.venue_ids,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color,
        }
    }
}

/// Partial update for an existing event. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl EventPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_venues<I, V>(mut self, venue_ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.venue_ids = Some(venue_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_start_time(mut self, start: NaiveTime) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn with_end_time(mut self, end: NaiveTime) -> Self {
        self.end_time = Some(end);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.venue_ids.is_none()
            && self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.color.is_none()
    }

    /// Apply updates to an existing event.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(venue_ids) = self.venue_ids {
            event.venue_ids = venue_ids;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
        if let Some(color) = self.color {
            event.color = Some(color);
        }
    }
}
