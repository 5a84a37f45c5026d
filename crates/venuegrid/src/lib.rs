//! venuegrid: weekly venue scheduler.
//!
//! The library hosts the stateful half of the application: the [`Scheduler`]
//! store, its storage backends, configuration and the CLI surface. Pure
//! domain logic lives in `venuegrid_core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod storage;
pub mod store;

pub use config::Config;
pub use store::{Scheduler, StoreError};
