//! Persistence for settings and the completed-session counter.
//!
//! The engine only talks to the [`SettingsStore`] trait. Two implementations
//! are provided:
//!
//! - [`FileStore`]: one JSON file per key inside a data directory
//! - [`MemoryStore`]: in-memory values, used by tests and ephemeral runs
//!
//! Reads never fail: a missing or unreadable value is reported as absent so
//! the engine falls back to defaults.

mod error;
mod file;

pub use error::StoreError;
pub use file::FileStore;

use crate::types::Settings;

/// Key under which the settings record is stored.
pub const SETTINGS_KEY: &str = "pomo_settings";

/// Key under which the completed-session count is stored.
pub const SESSIONS_KEY: &str = "pomo_sessions";

/// Key-scoped persistent storage used by the timer engine.
pub trait SettingsStore {
    /// Loads the stored settings, or `None` if nothing usable is stored.
    fn load(&self) -> Option<Settings>;

    /// Persists the whole settings record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be written.
    fn save(&mut self, settings: &Settings) -> Result<(), StoreError>;

    /// Loads the completed-session count, `0` if nothing usable is stored.
    fn load_session_count(&self) -> u32;

    /// Persists the completed-session count.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be written.
    fn save_session_count(&mut self, count: u32) -> Result<(), StoreError>;
}

/// In-memory store for testing.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    settings: Option<Settings>,
    sessions: Option<u32>,
    settings_writes: usize,
    session_writes: usize,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the stored settings.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Pre-populates the stored session count.
    #[must_use]
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Makes every subsequent write fail.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Returns the settings as last written.
    #[must_use]
    pub fn stored_settings(&self) -> Option<Settings> {
        self.settings
    }

    /// Returns the session count as last written.
    #[must_use]
    pub fn stored_sessions(&self) -> Option<u32> {
        self.sessions
    }

    /// Number of successful settings writes.
    #[must_use]
    pub fn settings_writes(&self) -> usize {
        self.settings_writes
    }

    /// Number of successful session count writes.
    #[must_use]
    pub fn session_writes(&self) -> usize {
        self.session_writes
    }

    fn write_failure(key: &str) -> StoreError {
        StoreError::Io {
            path: key.into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock failure"),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Option<Settings> {
        self.settings
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(Self::write_failure(SETTINGS_KEY));
        }
        self.settings = Some(*settings);
        self.settings_writes += 1;
        Ok(())
    }

    fn load_session_count(&self) -> u32 {
        self.sessions.unwrap_or(0)
    }

    fn save_session_count(&mut self, count: u32) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(Self::write_failure(SESSIONS_KEY));
        }
        self.sessions = Some(count);
        self.session_writes += 1;
        Ok(())
    }
}
