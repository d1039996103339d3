//! Pure calculator core.
//!
//! This module contains the side-effect-free part of the engine:
//! - Tokens and expressions
//! - Left-to-right evaluation
//! - Immutable calculation history
//!
//! Nothing in this module performs I/O; persistence lives in
//! [`crate::store`] and the imperative flow in [`crate::session`].

mod evaluate;
mod float;
mod history;
mod token;

pub use evaluate::{evaluate, EvaluationError};
pub use history::{sort_for_display, Calculation, History};
pub use token::{Expression, ExpressionIssue, Operator, Token};
