//! Tokens and expressions.
//!
//! An expression is a flat sequence of numbers and binary operators,
//! read strictly left to right. Tokens are immutable values.

use super::evaluate::EvaluationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Binary operator.
///
/// A closed set: dispatch happens through [`Operator::apply`], never
/// through the symbol text.
///
/// # Example
///
/// ```rust
/// use calcbook::core::Operator;
///
/// assert_eq!(Operator::Multiply.apply(4.0, 2.5).unwrap(), 10.0);
/// assert!(Operator::Divide.apply(1.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Canonical keypad symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse a keypad symbol.
    ///
    /// Besides the canonical symbols this accepts `*`, `x`, the Cyrillic
    /// `х` and `/`. Surrounding whitespace is ignored.
    ///
    /// ```rust
    /// use calcbook::core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol(" / "), Some(Operator::Divide));
    /// assert_eq!(Operator::from_symbol("%"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" | "x" | "х" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to `(lhs, rhs)`.
    ///
    /// Division by zero (either sign) fails with
    /// [`EvaluationError::DivideByZero`]. Every other combination succeeds,
    /// including ones that overflow to infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvaluationError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(EvaluationError::DivideByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Atomic unit of an expression.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    Number(#[serde(with = "super::float")] f64),
    Operator(Operator),
}

impl Token {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Operator(_) => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Number(_) => None,
            Self::Operator(op) => Some(*op),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Structural problem found by [`Expression::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpressionIssue {
    /// No tokens at all
    Empty,
    /// First token is an operator
    LeadingOperator,
    /// Last token is an operator, so the final pair is incomplete
    TrailingOperator,
    /// A token sits in a slot reserved for the other kind
    UnexpectedToken { index: usize },
}

impl fmt::Display for ExpressionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("expression is empty"),
            Self::LeadingOperator => f.write_str("expression starts with an operator"),
            Self::TrailingOperator => f.write_str("expression ends with an operator"),
            Self::UnexpectedToken { index } => write!(f, "unexpected token at position {}", index),
        }
    }
}

/// Ordered token sequence for one computation request.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{Expression, Operator};
///
/// let mut expression = Expression::new();
/// expression.push_number(5.0);
/// expression.push_operator(Operator::Add);
/// expression.push_number(3.0);
///
/// assert_eq!(expression.len(), 3);
/// assert_eq!(expression.to_string(), "5 + 3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_number(&mut self, value: f64) {
        self.tokens.push(Token::Number(value));
    }

    pub fn push_operator(&mut self, op: Operator) {
        self.tokens.push(Token::Operator(op));
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Check the alternating Number/Operator shape, reporting every issue.
    ///
    /// Validation is advisory: [`evaluate`](crate::core::evaluate()) accepts
    /// malformed input and truncates at the first broken pair.
    ///
    /// ```rust
    /// use calcbook::core::{Expression, Operator, Token};
    /// use stillwater::validation::Validation;
    ///
    /// let expression = Expression::from(vec![
    ///     Token::Operator(Operator::Add),
    ///     Token::Number(1.0),
    ///     Token::Operator(Operator::Add),
    /// ]);
    ///
    /// match expression.validate() {
    ///     Validation::Failure(issues) => assert_eq!(issues.len(), 4),
    ///     Validation::Success(_) => panic!("expected issues"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ExpressionIssue>> {
        let Some(first) = self.tokens.first() else {
            return Validation::fail(ExpressionIssue::Empty);
        };

        let mut checks: Vec<Validation<(), NonEmptyVec<ExpressionIssue>>> = Vec::new();

        if !first.is_number() {
            checks.push(Validation::fail(ExpressionIssue::LeadingOperator));
        }

        // Even slots hold numbers, odd slots hold operators.
        for (index, token) in self.tokens.iter().enumerate().skip(1) {
            let expects_number = index % 2 == 0;
            if token.is_number() != expects_number {
                checks.push(Validation::fail(ExpressionIssue::UnexpectedToken { index }));
            }
        }

        if self.tokens.len() > 1 && self.tokens.last().is_some_and(|t| !t.is_number()) {
            checks.push(Validation::fail(ExpressionIssue::TrailingOperator));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// True when [`validate`](Self::validate) finds no issues.
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_success()
    }
}

impl From<Vec<Token>> for Expression {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<Token> for Expression {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(expression: &Expression) -> Vec<ExpressionIssue> {
        match expression.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn operator_symbols_round_trip() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn operator_accepts_keypad_aliases() {
        assert_eq!(Operator::from_symbol("х"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("x"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("="), None);
    }

    #[test]
    fn apply_performs_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(Operator::Subtract.apply(2.0, 3.0).unwrap(), -1.0);
        assert_eq!(Operator::Multiply.apply(2.0, 3.0).unwrap(), 6.0);
        assert_eq!(Operator::Divide.apply(3.0, 2.0).unwrap(), 1.5);
    }

    #[test]
    fn divide_rejects_both_zeroes() {
        assert_eq!(
            Operator::Divide.apply(1.0, 0.0),
            Err(EvaluationError::DivideByZero)
        );
        assert_eq!(
            Operator::Divide.apply(1.0, -0.0),
            Err(EvaluationError::DivideByZero)
        );
    }

    #[test]
    fn token_accessors() {
        assert_eq!(Token::Number(2.0).as_number(), Some(2.0));
        assert_eq!(Token::Number(2.0).as_operator(), None);
        assert_eq!(
            Token::Operator(Operator::Add).as_operator(),
            Some(Operator::Add)
        );
        assert!(!Token::from(Operator::Add).is_number());
    }

    #[test]
    fn expression_displays_space_separated() {
        let expression = Expression::from(vec![
            Token::Number(1.5),
            Token::Operator(Operator::Divide),
            Token::Number(-2.0),
        ]);
        assert_eq!(expression.to_string(), "1.5 ÷ -2");
    }

    #[test]
    fn well_formed_expression_has_no_issues() {
        let expression = Expression::from(vec![
            Token::Number(1.0),
            Token::Operator(Operator::Add),
            Token::Number(2.0),
        ]);
        assert!(expression.is_well_formed());
        assert!(Expression::from(vec![Token::Number(7.0)]).is_well_formed());
    }

    #[test]
    fn empty_expression_reports_empty() {
        assert_eq!(issues(&Expression::new()), vec![ExpressionIssue::Empty]);
    }

    #[test]
    fn validate_accumulates_all_issues() {
        let expression = Expression::from(vec![
            Token::Number(1.0),
            Token::Number(2.0),
            Token::Operator(Operator::Add),
            Token::Operator(Operator::Add),
        ]);

        let found = issues(&expression);
        assert_eq!(
            found,
            vec![
                ExpressionIssue::UnexpectedToken { index: 1 },
                ExpressionIssue::UnexpectedToken { index: 2 },
                ExpressionIssue::TrailingOperator,
            ]
        );
    }

    #[test]
    fn dangling_operator_is_trailing_only_after_a_number() {
        let dangling = Expression::from(vec![Token::Number(1.0), Token::Operator(Operator::Add)]);
        assert_eq!(issues(&dangling), vec![ExpressionIssue::TrailingOperator]);

        let lone = Expression::from(vec![Token::Operator(Operator::Add)]);
        assert_eq!(issues(&lone), vec![ExpressionIssue::LeadingOperator]);
    }

    #[test]
    fn expression_serializes_as_token_list() {
        let expression = Expression::from(vec![
            Token::Number(2.0),
            Token::Operator(Operator::Multiply),
            Token::Number(4.0),
        ]);

        let json = serde_json::to_string(&expression).unwrap();
        assert_eq!(json, r#"[{"number":2.0},{"operator":"multiply"},{"number":4.0}]"#);

        let deserialized: Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(expression, deserialized);
    }
}
