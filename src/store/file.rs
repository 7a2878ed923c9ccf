//! JSON file backed store.
//!
//! Each key is kept in its own `<key>.json` file inside the data directory.
//! Writes go to a temporary file first and are renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::StoreError;
use super::{SettingsStore, SESSIONS_KEY, SETTINGS_KEY};
use crate::types::Settings;

/// Store that keeps one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Reads and decodes the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn read_value<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key, source })
    }

    /// Encodes and writes `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_value<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let json = serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Reads `key`, logging and discarding any error.
    fn read_or_absent<T: DeserializeOwned>(&self, key: &'static str) -> Option<T> {
        match self.read_value(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring stored value: {}", e);
                None
            }
        }
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Option<Settings> {
        self.read_or_absent::<Settings>(SETTINGS_KEY)
            .map(Settings::sanitized)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.write_value(SETTINGS_KEY, settings)
    }

    fn load_session_count(&self) -> u32 {
        self.read_or_absent(SESSIONS_KEY).unwrap_or(0)
    }

    fn save_session_count(&mut self, count: u32) -> Result<(), StoreError> {
        self.write_value(SESSIONS_KEY, &count)
    }
}
