//! Settings store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing persisted values.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory could not be created.
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a key file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be decoded.
    #[error("stored value for '{key}' is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded.
    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns true if the stored data exists but is unreadable.
    #[must_use]
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
