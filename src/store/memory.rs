//! In-memory history store.

use super::error::StoreError;
use super::format::{Format, HistoryFile};
use super::HistoryStore;
use crate::core::Calculation;
use tracing::debug;

/// History store that keeps the encoded envelope in memory.
///
/// Data passes through the same codec as [`FileHistoryStore`](super::FileHistoryStore),
/// so round-trip behaviour is identical.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistoryStore {
    format: Format,
    persisted: Option<Vec<u8>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::with_format(Format::default())
    }

    pub fn with_format(format: Format) -> Self {
        Self {
            format,
            persisted: None,
        }
    }

    /// Seed the store with raw bytes, as if they had been written earlier.
    pub fn from_bytes(format: Format, bytes: Vec<u8>) -> Self {
        Self {
            format,
            persisted: Some(bytes),
        }
    }

    /// The currently persisted bytes, if anything was written.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.persisted.as_deref()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<Vec<Calculation>, StoreError> {
        let Some(bytes) = &self.persisted else {
            debug!("memory store is empty");
            return Ok(Vec::new());
        };

        let file = HistoryFile::decode(bytes, self.format)?;
        debug!(count = file.calculations.len(), "loaded history from memory");
        Ok(file.calculations)
    }

    fn append(&mut self, all: &[Calculation]) -> Result<(), StoreError> {
        let bytes = HistoryFile::new(all.to_vec()).encode(self.format)?;
        self.persisted = Some(bytes);
        debug!(count = all.len(), "saved history to memory");
        Ok(())
    }
}
