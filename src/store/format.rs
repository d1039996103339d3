//! On-disk encoding of the calculation history.
//!
//! The whole history is written as one versioned envelope. JSON is the
//! default for readability; bincode gives a compact form. Both keep
//! non-finite floats intact (JSON spells them `"inf"`, `"-inf"`, `"NaN"`).

use super::error::StoreError;
use crate::core::Calculation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version identifier for the history format
pub const HISTORY_FORMAT_VERSION: u32 = 1;

/// Encoding used for persisted history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// bincode
    Binary,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "bin",
        }
    }

    /// Infer the format from a file extension.
    pub fn for_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        [Self::Json, Self::Binary]
            .into_iter()
            .find(|format| extension.eq_ignore_ascii_case(format.extension()))
    }
}

/// Serializable envelope around the full list of calculations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryFile {
    /// History format version
    pub version: u32,

    /// When the envelope was written
    pub saved_at: DateTime<Utc>,

    /// Every calculation, in insertion order
    pub calculations: Vec<Calculation>,
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

impl HistoryFile {
    pub fn new(calculations: Vec<Calculation>) -> Self {
        Self {
            version: HISTORY_FORMAT_VERSION,
            saved_at: Utc::now(),
            calculations,
        }
    }

    /// Encode the envelope.
    pub fn encode(&self, format: Format) -> Result<Vec<u8>, StoreError> {
        match format {
            Format::Json => serde_json::to_vec_pretty(self)
                .map_err(|e| StoreError::SerializationFailed(e.to_string())),
            Format::Binary => {
                bincode::serialize(self).map_err(|e| StoreError::SerializationFailed(e.to_string()))
            }
        }
    }

    /// Decode an envelope, checking its version first.
    pub fn decode(bytes: &[u8], format: Format) -> Result<Self, StoreError> {
        let version = match format {
            Format::Json => serde_json::from_slice::<VersionHeader>(bytes)
                .map(|header| header.version)
                .map_err(|e| StoreError::LoadCorrupt(e.to_string()))?,
            Format::Binary => bincode::deserialize::<u32>(bytes)
                .map_err(|e| StoreError::LoadCorrupt(e.to_string()))?,
        };

        if version != HISTORY_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: version,
                supported: HISTORY_FORMAT_VERSION,
            });
        }

        match format {
            Format::Json => {
                serde_json::from_slice(bytes).map_err(|e| StoreError::LoadCorrupt(e.to_string()))
            }
            Format::Binary => {
                bincode::deserialize(bytes).map_err(|e| StoreError::LoadCorrupt(e.to_string()))
            }
        }
    }
}
