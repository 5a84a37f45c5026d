//! venuegrid_core - pure scheduling logic for the venue grid.
//!
//! Nothing in this crate performs I/O. Storage backends implement
//! [`storage::KeyValueStorage`] elsewhere.

pub mod schedule;
pub mod serde;
pub mod storage;
pub mod time;
