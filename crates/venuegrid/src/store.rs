//! The scheduler store: single owner of all events and venues.
//!
//! Every mutation builds the next data set, writes it to storage in full and
//! only then swaps it in and notifies subscribers. A failed write leaves the
//! in-memory state untouched, so memory and storage never disagree.

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::broadcast;

use venuegrid_core::schedule::{
    default_data, events_for_date_and_venue, remove_venue_from_events, Event, EventDraft,
    EventPatch, SchedulerChange, SchedulerData, Venue,
};
use venuegrid_core::storage::{KeyValueStorage, StorageError, SCHEDULER_DATA_KEY};
use venuegrid_core::time::{generate_id, today};

/// Channel capacity for change notifications.
const CHANNEL_CAPACITY: usize = 100;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to serialize scheduler data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Owns the scheduler data and the storage it is persisted to.
#[derive(Debug)]
pub struct Scheduler<S> {
    storage: S,
    data: SchedulerData,
    changes: broadcast::Sender<SchedulerChange>,
}

impl<S: KeyValueStorage> Scheduler<S> {
    /// Loads the stored data set, seeding sample events dated today when
    /// nothing usable is stored.
    pub fn load(storage: S) -> Result<Self> {
        Self::load_with_date(storage, today())
    }

    /// Like [`Scheduler::load`], with an explicit date for the sample events.
    ///
    /// A blob that fails to parse is treated as missing: it is replaced by
    /// the default data set and never reported to the caller. Read and write
    /// failures of the medium itself are returned.
    pub fn load_with_date(storage: S, sample_date: NaiveDate) -> Result<Self> {
        let stored = match storage.get(SCHEDULER_DATA_KEY)? {
            Some(blob) => match serde_json::from_str::<SchedulerData>(&blob) {
                Ok(data) => Some(data),
                Err(err) => {
                    tracing::warn!(error = %err, "Stored scheduler data is malformed, using defaults");
                    None
                }
            },
            None => None,
        };

        let data = match stored {
            Some(data) => {
                tracing::debug!(
                    events = data.events.len(),
                    venues = data.venues.len(),
                    "Loaded scheduler data"
                );
                data
            }
            None => {
                let data = default_data(sample_date);
                tracing::info!(date = %sample_date, "Seeding default scheduler data");
                persist(&storage, &data)?;
                data
            }
        };

        let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        Ok(Self {
            storage,
            data,
            changes,
        })
    }

    /// The full data set.
    pub fn data(&self) -> &SchedulerData {
        &self.data
    }

    pub fn events(&self) -> &[Event] {
        &self.data.events
    }

    pub fn venues(&self) -> &[Venue] {
        &self.data.venues
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.data.event(id)
    }

    pub fn venue(&self, id: &str) -> Option<&Venue> {
        self.data.venue(id)
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Subscribes to changes. Only mutations that changed something are
    /// published, after they have been persisted.
    pub fn subscribe(&self) -> broadcast::Receiver<SchedulerChange> {
        self.changes.subscribe()
    }

    /// Creates an event from `draft` under a fresh id.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<Event> {
        let event = draft.into_event(self.fresh_id());

        let mut next = self.data.clone();
        next.events.push(event.clone());
        self.commit(next, Some(SchedulerChange::event_added(event.clone())))?;

        tracing::debug!(id = %event.id, title = %event.title, "Added event");
        Ok(event)
    }

    /// Applies `patch` to the event with `id`.
    ///
    /// Returns the updated event, or `None` when no event has that id. The
    /// data set is persisted either way.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> Result<Option<Event>> {
        let mut next = self.data.clone();
        let updated = next.events.iter_mut().find(|event| event.id == id).map(|event| {
            patch.apply_to(event);
            event.clone()
        });

        if updated.is_none() {
            tracing::debug!(id, "Update for unknown event ignored");
        }

        let change = updated.clone().map(SchedulerChange::event_updated);
        self.commit(next, change)?;
        Ok(updated)
    }

    /// Deletes the event with `id`. Returns whether it existed.
    pub fn delete_event(&mut self, id: &str) -> Result<bool> {
        let mut next = self.data.clone();
        next.events.retain(|event| event.id != id);
        let removed = next.events.len() != self.data.events.len();

        let change = removed.then(|| SchedulerChange::event_deleted(id));
        self.commit(next, change)?;

        tracing::debug!(id, removed, "Deleted event");
        Ok(removed)
    }

    /// Creates a venue named `name` under a fresh id.
    pub fn add_venue(&mut self, name: impl Into<String>) -> Result<Venue> {
        let venue = Venue::new(self.fresh_id(), name);

        let mut next = self.data.clone();
        next.venues.push(venue.clone());
        self.commit(next, Some(SchedulerChange::venue_added(venue.clone())))?;

        tracing::debug!(id = %venue.id, name = %venue.name, "Added venue");
        Ok(venue)
    }

    /// Deletes the venue with `id` and detaches it from every event.
    ///
    /// Events left without any venue are deleted too. Returns whether
    /// anything changed.
    pub fn delete_venue(&mut self, id: &str) -> Result<bool> {
        let removal = remove_venue_from_events(&self.data.events, id);

        let mut next = self.data.clone();
        next.venues.retain(|venue| venue.id != id);
        let venue_removed = next.venues.len() != self.data.venues.len();
        next.events = removal.events;

        let changed = venue_removed
            || !removal.removed_events.is_empty()
            || !removal.updated_events.is_empty();

        tracing::debug!(
            id,
            venue_removed,
            removed_events = removal.removed_events.len(),
            updated_events = removal.updated_events.len(),
            "Deleted venue"
        );

        let change = changed.then(|| SchedulerChange::VenueDeleted {
            id: id.to_string(),
            removed_events: removal.removed_events,
            updated_events: removal.updated_events,
        });
        self.commit(next, change)?;
        Ok(changed)
    }

    /// Events on `date` whose primary venue is `venue_id`.
    pub fn events_for_date_and_venue(&self, date: NaiveDate, venue_id: &str) -> Vec<&Event> {
        events_for_date_and_venue(&self.data.events, date, venue_id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if !self.data.contains_id(&id) {
                return id;
            }
        }
    }

    fn commit(&mut self, next: SchedulerData, change: Option<SchedulerChange>) -> Result<()> {
        persist(&self.storage, &next)?;
        self.data = next;

        if let Some(change) = change {
            // Err only means there are no receivers.
            let _ = self.changes.send(change);
        }
        Ok(())
    }
}

fn persist<S: KeyValueStorage>(storage: &S, data: &SchedulerData) -> Result<()> {
    let blob = serde_json::to_string(data)?;
    storage.set(SCHEDULER_DATA_KEY, &blob)?;
    Ok(())
}
