use thiserror::Error;

/// Errors raised when validating user input for an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event must be booked against at least one venue")]
    NoVenues,
    #[error("Unknown venue: {0}")]
    UnknownVenue(String),
    #[error("Invalid color format: {0}")]
    InvalidColor(String),
}

/// Errors raised when validating user input for a venue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VenueError {
    #[error("Venue name cannot be empty")]
    EmptyName,
}

/// Errors raised when reading a persisted event record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Event {0} has no venue")]
    NoVenue(String),
}
