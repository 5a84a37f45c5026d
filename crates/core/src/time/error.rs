use thiserror::Error;

/// Errors that can occur when parsing a time of day.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid time format, expected HH:mm: {0}")]
    InvalidFormat(String),
    #[error("Hour out of range (0-23): {0}")]
    HourOutOfRange(u32),
    #[error("Minute out of range (0-59): {0}")]
    MinuteOutOfRange(u32),
}
