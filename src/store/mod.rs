//! Persistence for calculation history.
//!
//! Stores always read and write the whole collection: `append` replaces
//! everything previously persisted with the list it is given.

pub mod config;
pub mod error;
pub mod format;
mod file;
mod memory;

pub use config::{StoreConfig, StoreConfigBuilder};
pub use error::StoreError;
pub use file::FileHistoryStore;
pub use format::{Format, HistoryFile, HISTORY_FORMAT_VERSION};
pub use memory::MemoryHistoryStore;

use crate::core::Calculation;

/// Persistence boundary for calculations.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{Calculation, Expression};
/// use calcbook::store::{HistoryStore, MemoryHistoryStore};
///
/// let mut store = MemoryHistoryStore::new();
/// assert!(store.load().unwrap().is_empty());
///
/// let all = vec![Calculation::new(Expression::new(), 42.0)];
/// store.append(&all).unwrap();
/// assert_eq!(store.load().unwrap(), all);
/// ```
pub trait HistoryStore {
    /// Read every persisted calculation in insertion order.
    ///
    /// Returns an empty list when nothing has been persisted yet.
    fn load(&self) -> Result<Vec<Calculation>, StoreError>;

    /// Overwrite the persisted store with `all`.
    ///
    /// Calling this twice with the same list leaves exactly that list
    /// persisted.
    fn append(&mut self, all: &[Calculation]) -> Result<(), StoreError>;
}

impl<T: HistoryStore + ?Sized> HistoryStore for &mut T {
    fn load(&self) -> Result<Vec<Calculation>, StoreError> {
        (**self).load()
    }

    fn append(&mut self, all: &[Calculation]) -> Result<(), StoreError> {
        (**self).append(all)
    }
}

impl<T: HistoryStore + ?Sized> HistoryStore for Box<T> {
    fn load(&self) -> Result<Vec<Calculation>, StoreError> {
        (**self).load()
    }

    fn append(&mut self, all: &[Calculation]) -> Result<(), StoreError> {
        (**self).append(all)
    }
}
