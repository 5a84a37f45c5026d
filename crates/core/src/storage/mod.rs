mod error;
mod traits;

pub use error::{Result, StorageError};
pub use traits::KeyValueStorage;

/// Key under which the whole scheduler data set is stored.
pub const SCHEDULER_DATA_KEY: &str = "scheduler-data";
