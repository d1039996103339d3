//! History store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving history
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted data exists but could not be decoded
    #[error("History data is corrupt: {0}")]
    LoadCorrupt(String),

    /// Persisted data was written by an incompatible format version
    #[error("Unsupported history version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Encoding the history failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Reading or writing the backing file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors raised while decoding existing data.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::LoadCorrupt(_) | Self::UnsupportedVersion { .. })
    }
}
