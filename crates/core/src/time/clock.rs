use chrono::{NaiveTime, Timelike};

use super::error::TimeError;
use super::SLOT_MINUTES;

/// Converts an `HH:mm` string into minutes since midnight.
///
/// The input must consist of exactly two colon-separated integer fields with
/// the hour in `0..24` and the minute in `0..60`.
pub fn time_to_minutes(time: &str) -> Result<u32, TimeError> {
    let invalid = || TimeError::InvalidFormat(time.to_string());

    let mut fields = time.split(':');
    let (Some(hours), Some(minutes), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(invalid());
    };

    let is_number = |field: &str| !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit());
    if !is_number(hours) || !is_number(minutes) {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    if hours >= 24 {
        return Err(TimeError::HourOutOfRange(hours));
    }
    if minutes >= 60 {
        return Err(TimeError::MinuteOutOfRange(minutes));
    }

    Ok(hours * 60 + minutes)
}

/// Parses an `HH:mm` string into a NaiveTime.
pub fn parse_time(time: &str) -> Result<NaiveTime, TimeError> {
    let minutes = time_to_minutes(time)?;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        .ok_or_else(|| TimeError::InvalidFormat(time.to_string()))
}

/// Minutes since midnight for an already-parsed time. Seconds are ignored.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Formats a time in the canonical `HH:mm` form.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Formats a time as `h:mm AM` / `h:mm PM`.
pub fn format_time_to_12_hour(time: NaiveTime) -> String {
    let hour = time.hour();
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, time.minute(), period)
}

/// Generates the grid's time axis in 15-minute steps.
///
/// Runs from `start_hour:00` through `end_hour:00`; the last hour only
/// contributes its `:00` slot. Slots that do not fit in a day (24:00 and
/// later) are dropped.
pub fn generate_time_slots(start_hour: u32, end_hour: u32) -> Vec<NaiveTime> {
    if start_hour > end_hour {
        return Vec::new();
    }

    // Nothing past 24:00 can be represented.
    let first = start_hour.min(24) * 60;
    let last = end_hour.min(24) * 60;

    (first..=last)
        .step_by(SLOT_MINUTES as usize)
        .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
        .collect()
}
