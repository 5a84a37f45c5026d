//! Serde helper functions for the persisted scheduler blob.
//!
//! Times of day are stored as `HH:mm` strings rather than chrono's default
//! `HH:MM:SS` representation so the blob stays readable by older clients.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize a NaiveTime as `HH:mm`.
pub fn serialize_hhmm<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format("%H:%M").to_string())
}

/// Serialize a list of NaiveTime values as `HH:mm` strings.
pub fn serialize_hhmm_list<S>(times: &[NaiveTime], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(times.iter().map(|time| time.format("%H:%M").to_string()))
}

/// Deserialize a NaiveTime.
/// Accepts formats: HH:MM or HH:MM:SS
pub fn deserialize_hhmm<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s.trim(), "%H:%M:%S"))
        .map_err(serde::de::Error::custom)
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
