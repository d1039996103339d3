//! Calcbook: a pure left-to-right calculator engine with persistent history
//!
//! Calcbook follows a "pure core, imperative shell" layout. Expression
//! evaluation and history tracking are pure functions with no side effects,
//! while persistence and the entry flow live in a thin shell around them.
//!
//! # Core Concepts
//!
//! - **Expression**: A flat sequence of number and operator tokens
//! - **Evaluation**: Strict left-to-right folding, no operator precedence
//! - **History**: Immutable record of completed calculations
//! - **Store**: Whole-collection persistence of the history
//!
//! # Example
//!
//! ```rust
//! use calcbook::core::{evaluate, Calculation, History};
//! use calcbook::expression;
//! use calcbook::store::{HistoryStore, MemoryHistoryStore};
//!
//! let expr = expression![5 + 3 * 2];
//! let result = evaluate(&expr).unwrap();
//! assert_eq!(result, 16.0);
//!
//! let history = History::new().record(Calculation::new(expr, result));
//!
//! let mut store = MemoryHistoryStore::new();
//! store.append(history.calculations()).unwrap();
//! assert_eq!(store.load().unwrap(), history.calculations());
//! ```

mod macros;

pub mod core;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{evaluate, Calculation, EvaluationError, Expression, History, Operator, Token};
pub use crate::session::{Calculator, SessionError};
pub use crate::store::{FileHistoryStore, HistoryStore, MemoryHistoryStore, StoreError};
