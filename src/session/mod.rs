//! Imperative shell around the pure core.
//!
//! A [`Calculator`] collects tokens as they are entered, evaluates them
//! with [`crate::core::evaluate`] and persists every successful
//! calculation through a [`crate::store::HistoryStore`].
//!
//! # Example
//!
//! ```rust
//! use calcbook::core::Operator;
//! use calcbook::session::Calculator;
//! use calcbook::store::MemoryHistoryStore;
//!
//! let mut calculator = Calculator::open(MemoryHistoryStore::new())?;
//! calculator.push_operation(5.0, Operator::Add);
//! calculator.push_operation(3.0, Operator::Multiply);
//!
//! assert_eq!(calculator.calculate(2.0)?, 16.0);
//! assert_eq!(calculator.history().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod calculator;
mod error;

pub use calculator::Calculator;
pub use error::SessionError;
