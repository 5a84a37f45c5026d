mod error;
mod layout;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use error::{EventError, RecordError, VenueError};
pub use layout::{layout_day, DayLayout, EventPlacement, GridSpec, VenueColumn};
pub use mock_data::{
    default_data, default_venues, sample_events, DEFAULT_EVENT_COLOR, EVENT_COLORS,
};
pub use operations::{
    events_for_date_and_venue, events_in_column, events_on_date, remove_venue_from_events,
    validate_draft, validate_venue_name, VenueRemoval,
};
pub use requests::{EventDraft, EventPatch};
pub use types::{Event, SchedulerChange, SchedulerData, Venue};
