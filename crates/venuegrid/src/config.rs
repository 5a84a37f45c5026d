use std::{env, path::PathBuf};

use venuegrid_core::schedule::GridSpec;
use venuegrid_core::time::{DEFAULT_END_HOUR, DEFAULT_SLOT_HEIGHT, DEFAULT_START_HOUR};

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".venuegrid";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the persisted scheduler data (default: ".venuegrid")
    pub data_dir: PathBuf,
    /// First hour of the grid (default: 9)
    pub start_hour: u32,
    /// Last hour of the grid, only its `:00` slot is shown (default: 18)
    pub end_hour: u32,
    /// Height of one 15-minute slot in pixels (default: 40)
    pub slot_height: f64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `VENUEGRID_DATA_DIR` - Data directory (default: ".venuegrid")
    /// - `VENUEGRID_START_HOUR` - First grid hour (default: 9)
    /// - `VENUEGRID_END_HOUR` - Last grid hour (default: 18)
    /// - `VENUEGRID_SLOT_HEIGHT` - Slot height in pixels (default: 40)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: var("VENUEGRID_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            start_hour: var("VENUEGRID_START_HOUR")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_START_HOUR),
            end_hour: var("VENUEGRID_END_HOUR")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_END_HOUR),
            slot_height: var("VENUEGRID_SLOT_HEIGHT")
                .and_then(|v| v.parse().ok())
                .filter(|h: &f64| h.is_finite() && *h > 0.0)
                .unwrap_or(DEFAULT_SLOT_HEIGHT),
        }
    }

    /// The grid shape described by this configuration.
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            slot_height: self.slot_height,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.data_dir, PathBuf::from(".venuegrid"));
        assert_eq!(config.start_hour, 9);
        assert_eq!(config.end_hour, 18);
        assert_eq!(config.slot_height, 40.0);
    }

    #[test]
    fn test_values_from_vars() {
        let config = config_from(&[
            ("VENUEGRID_DATA_DIR", "/var/lib/venuegrid"),
            ("VENUEGRID_START_HOUR", "7"),
            ("VENUEGRID_END_HOUR", "22"),
            ("VENUEGRID_SLOT_HEIGHT", "24.5"),
        ]);

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/venuegrid"));
        assert_eq!(config.start_hour, 7);
        assert_eq!(config.end_hour, 22);
        assert_eq!(config.slot_height, 24.5);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("VENUEGRID_DATA_DIR", "  "),
            ("VENUEGRID_START_HOUR", "early"),
            ("VENUEGRID_SLOT_HEIGHT", "-3"),
        ]);

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_grid_spec() {
        let config = config_from(&[("VENUEGRID_START_HOUR", "8"), ("VENUEGRID_END_HOUR", "9")]);
        let spec = config.grid_spec();

        assert_eq!(spec.slots().len(), 5);
        assert_eq!(spec.slot_height, 40.0);
    }
}
