//! Calculation history tracking.
//!
//! Provides immutable tracking of completed calculations over time,
//! following functional programming principles.

use super::token::Expression;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single completed calculation.
///
/// Calculations are immutable values created only after an expression
/// evaluated successfully.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{Calculation, Expression, Operator};
/// use chrono::Utc;
///
/// let mut expression = Expression::new();
/// expression.push_number(2.0);
/// expression.push_operator(Operator::Add);
/// expression.push_number(2.0);
///
/// let calculation = Calculation {
///     expression,
///     result: 4.0,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(calculation.result, 4.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The tokens that were evaluated
    pub expression: Expression,
    /// The evaluated result
    #[serde(with = "super::float")]
    pub result: f64,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    /// Create a calculation stamped with the current time.
    pub fn new(expression: Expression, result: f64) -> Self {
        Self {
            expression,
            result,
            timestamp: Utc::now(),
        }
    }
}

/// Order calculations for display: most recent first.
///
/// Does not touch the input. Calculations with equal timestamps keep
/// their relative order.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{sort_for_display, Calculation, Expression};
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// let older = Calculation { expression: Expression::new(), result: 1.0, timestamp: now - Duration::seconds(5) };
/// let newer = Calculation { expression: Expression::new(), result: 2.0, timestamp: now };
///
/// let sorted = sort_for_display(&[older.clone(), newer.clone()]);
/// assert_eq!(sorted, vec![newer, older]);
/// ```
pub fn sort_for_display(calculations: &[Calculation]) -> Vec<Calculation> {
    let mut sorted = calculations.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// Ordered history of calculations.
///
/// History is immutable - the `record` method returns a new history
/// with the calculation added. Insertion order is the persisted order.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{Calculation, Expression, History};
///
/// let history = History::new();
/// let history = history.record(Calculation::new(Expression::new(), 1.0));
/// let history = history.record(Calculation::new(Expression::new(), 2.0));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().map(|c| c.result), Some(2.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    calculations: Vec<Calculation>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            calculations: Vec::new(),
        }
    }

    /// Record a calculation, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the calculation appended.
    ///
    /// ```rust
    /// use calcbook::core::{Calculation, Expression, History};
    ///
    /// let history = History::new();
    /// let new_history = history.record(Calculation::new(Expression::new(), 0.0));
    ///
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, calculation: Calculation) -> Self {
        let mut calculations = self.calculations.clone();
        calculations.push(calculation);
        Self { calculations }
    }

    /// All calculations in insertion order.
    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    /// The most recently recorded calculation.
    pub fn latest(&self) -> Option<&Calculation> {
        self.calculations.last()
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    /// Calculations ordered newest first. See [`sort_for_display`].
    pub fn sorted_for_display(&self) -> Vec<Calculation> {
        sort_for_display(&self.calculations)
    }

    pub fn into_calculations(self) -> Vec<Calculation> {
        self.calculations
    }
}

impl From<Vec<Calculation>> for History {
    fn from(calculations: Vec<Calculation>) -> Self {
        Self { calculations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operator, Token};
    use chrono::Duration;

    fn calculation_at(result: f64, timestamp: DateTime<Utc>) -> Calculation {
        Calculation {
            expression: Expression::from(vec![Token::Number(result)]),
            result,
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert!(history.sorted_for_display().is_empty());
    }

    #[test]
    fn record_adds_calculation() {
        let history = History::new().record(Calculation::new(Expression::new(), 3.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.calculations()[0].result, 3.0);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();
        let new_history = history.record(Calculation::new(Expression::new(), 3.0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn record_preserves_insertion_order() {
        let now = Utc::now();
        let history = History::new()
            .record(calculation_at(1.0, now))
            .record(calculation_at(2.0, now - Duration::seconds(10)))
            .record(calculation_at(3.0, now + Duration::seconds(10)));

        let results: Vec<f64> = history.calculations().iter().map(|c| c.result).collect();
        assert_eq!(results, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn sort_for_display_orders_newest_first() {
        let now = Utc::now();
        let list = vec![
            calculation_at(1.0, now - Duration::seconds(30)),
            calculation_at(2.0, now),
            calculation_at(3.0, now - Duration::seconds(10)),
        ];

        let sorted = sort_for_display(&list);
        let results: Vec<f64> = sorted.iter().map(|c| c.result).collect();
        assert_eq!(results, vec![2.0, 3.0, 1.0]);

        // Input untouched
        assert_eq!(list[0].result, 1.0);
    }

    #[test]
    fn sort_for_display_is_stable_for_ties() {
        let now = Utc::now();
        let list = vec![
            calculation_at(1.0, now),
            calculation_at(2.0, now),
            calculation_at(3.0, now + Duration::seconds(1)),
            calculation_at(4.0, now),
        ];

        let results: Vec<f64> = sort_for_display(&list).iter().map(|c| c.result).collect();
        assert_eq!(results, vec![3.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::new().record(Calculation::new(
            Expression::from(vec![
                Token::Number(6.0),
                Token::Operator(Operator::Divide),
                Token::Number(4.0),
            ]),
            1.5,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
