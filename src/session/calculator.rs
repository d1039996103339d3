//! Calculator session that evaluates input and records history.

use super::error::SessionError;
use crate::core::{evaluate, Calculation, Expression, History, Operator};
use crate::store::{HistoryStore, StoreError};
use tracing::{debug, info, warn};

/// A calculator session.
///
/// Owns the expression being entered, the in-memory history and the
/// store the history is persisted to.
pub struct Calculator<S: HistoryStore> {
    pending: Expression,
    history: History,
    store: S,
}

impl<S: HistoryStore> Calculator<S> {
    /// Open a session, loading the persisted history.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let history = History::from(store.load()?);
        debug!(count = history.len(), "opened calculator session");
        Ok(Self {
            pending: Expression::new(),
            history,
            store,
        })
    }

    /// Open a session, starting from an empty history if loading fails.
    pub fn open_or_empty(store: S) -> Self {
        let history = match store.load() {
            Ok(calculations) => History::from(calculations),
            Err(e) => {
                warn!(error = %e, "could not load history, starting empty");
                History::new()
            }
        };
        Self {
            pending: Expression::new(),
            history,
            store,
        }
    }

    /// Append an entered number followed by an operator.
    pub fn push_operation(&mut self, number: f64, operator: Operator) {
        self.pending.push_number(number);
        self.pending.push_operator(operator);
    }

    /// Discard the expression being entered.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Expression entered so far (pure)
    pub fn pending(&self) -> &Expression {
        &self.pending
    }

    /// Recorded history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// History ordered newest first.
    pub fn display_history(&self) -> Vec<Calculation> {
        self.history.sorted_for_display()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Finish the expression with `number` and evaluate it.
    ///
    /// On success the calculation is recorded and the whole history is
    /// persisted. The pending expression is cleared either way. If
    /// persisting fails the calculation stays in memory and is written
    /// with the next successful save.
    pub fn calculate(&mut self, number: f64) -> Result<f64, SessionError> {
        let mut expression = std::mem::take(&mut self.pending);
        expression.push_number(number);

        debug!(expression = %expression, "evaluating");
        let result = match evaluate(&expression) {
            Ok(result) => result,
            Err(e) => {
                warn!(expression = %expression, error = %e, "evaluation failed");
                return Err(e.into());
            }
        };

        self.history = self.history.record(Calculation::new(expression, result));
        info!(result, count = self.history.len(), "recorded calculation");

        self.store.append(self.history.calculations())?;
        Ok(result)
    }
}
