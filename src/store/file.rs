//! File-backed history store.

use super::config::{StoreConfig, StoreConfigBuilder};
use super::error::StoreError;
use super::format::{Format, HistoryFile};
use super::HistoryStore;
use crate::core::Calculation;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// History store persisted to a single file.
///
/// Writes are atomic: the envelope goes to `<path>.tmp` first and is then
/// renamed over the target, so a crash mid-write never leaves a
/// half-written history behind.
///
/// # Example
///
/// ```rust,no_run
/// use calcbook::store::{FileHistoryStore, HistoryStore};
///
/// let store = FileHistoryStore::at("history.json");
/// let calculations = store.load()?;
/// # Ok::<(), calcbook::store::StoreError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FileHistoryStore {
    config: StoreConfig,
}

impl FileHistoryStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Store at `path`, with the format inferred from its extension.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfigBuilder::new().path(path).build())
    }

    pub fn path(&self) -> &Path {
        self.config.path()
    }

    pub fn format(&self) -> Format {
        self.config.format()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path().as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Default for FileHistoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Vec<Calculation>, StoreError> {
        let path = self.path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no history file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        let file = HistoryFile::decode(&bytes, self.format())?;
        debug!(
            path = %path.display(),
            count = file.calculations.len(),
            format = ?self.format(),
            "loaded history"
        );
        Ok(file.calculations)
    }

    fn append(&mut self, all: &[Calculation]) -> Result<(), StoreError> {
        let bytes = HistoryFile::new(all.to_vec()).encode(self.format())?;
        let path = self.path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        // Atomic write: write to temp file, then rename
        let temp_path = self.temp_path();
        fs::write(&temp_path, &bytes).map_err(|e| StoreError::io(&temp_path, e))?;
        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::io(path, e));
        }

        debug!(
            path = %path.display(),
            count = all.len(),
            format = ?self.format(),
            "saved history"
        );
        Ok(())
    }
}
