//! Configuration for the file-backed history store.

use super::format::Format;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "calcbook";
const FILE_STEM: &str = "history";

/// Where and how the history file is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub(crate) path: PathBuf,
    pub(crate) format: Format,
}

impl StoreConfig {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Default location: `<data dir>/calcbook/history.<ext>`, or the
    /// working directory when the platform has no data directory.
    pub fn default_path(format: Format) -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir
                .join(APP_DIR)
                .join(format!("{}.{}", FILE_STEM, format.extension())),
            None => PathBuf::from(format!("{}-{}.{}", APP_DIR, FILE_STEM, format.extension())),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfigBuilder::new().build()
    }
}

/// Builder for [`StoreConfig`].
///
/// # Example
///
/// ```rust
/// use calcbook::store::{Format, StoreConfigBuilder};
///
/// let config = StoreConfigBuilder::new()
///     .path("/tmp/calcbook/history.bin")
///     .build();
///
/// // Format follows the extension unless set explicitly
/// assert_eq!(config.format(), Format::Binary);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StoreConfigBuilder {
    path: Option<PathBuf>,
    format: Option<Format>,
}

impl StoreConfigBuilder {
    pub fn new() -> Self {
        Self {
            path: None,
            format: None,
        }
    }

    /// Set the history file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the encoding explicitly
    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Build the configuration
    pub fn build(self) -> StoreConfig {
        let format = self
            .format
            .or_else(|| self.path.as_deref().and_then(Format::for_path))
            .unwrap_or_default();
        let path = self
            .path
            .unwrap_or_else(|| StoreConfig::default_path(format));

        StoreConfig { path, format }
    }
}
