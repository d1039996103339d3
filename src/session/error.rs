//! Session error types.

use crate::core::EvaluationError;
use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by a calculator session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Failed to persist history: {0}")]
    Store(#[from] StoreError),
}
