//! File-backed storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use venuegrid_core::storage::{KeyValueStorage, Result, StorageError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a `.tmp` sibling first and are renamed into place, so readers
/// never observe a half-written value. The directory is created on the first
/// write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let write_failed = |err: std::io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            message: err.to_string(),
        };

        fs::create_dir_all(&self.dir).map_err(write_failed)?;

        let temp = path.with_extension("json.tmp");
        fs::write(&temp, value).map_err(write_failed)?;
        fs::rename(&temp, &path).map_err(write_failed)?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Wrote storage file");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }
}
