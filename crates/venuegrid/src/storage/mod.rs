//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! `venuegrid_core::storage::KeyValueStorage` trait.
//!
//! - [`MemoryStorage`]: a shared in-process map, used by tests and for
//!   throwaway sessions.
//! - [`FileStorage`]: one JSON file per key inside a data directory.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
