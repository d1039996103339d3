//! Left-to-right expression evaluation.
//!
//! Operators are applied strictly in sequence: there is no precedence, so
//! `5 + 3 × 2` is `(5 + 3) × 2 = 16`.

use super::token::{Expression, Token};
use thiserror::Error;

/// Errors that abort an evaluation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Division by zero")]
    DivideByZero,

    #[error("Cannot evaluate an empty expression")]
    EmptyExpression,
}

/// Evaluate an expression left to right.
///
/// The first number seeds the accumulator; each following
/// `(operator, number)` pair folds into it. Evaluation stops at the first
/// pair that is incomplete or out of order and returns the accumulator
/// as it stands. An expression that starts with an operator evaluates
/// to `0.0`.
///
/// # Example
///
/// ```rust
/// use calcbook::core::{evaluate, EvaluationError, Expression, Operator, Token};
///
/// let expression = Expression::from(vec![
///     Token::Number(5.0),
///     Token::Operator(Operator::Add),
///     Token::Number(3.0),
///     Token::Operator(Operator::Multiply),
///     Token::Number(2.0),
/// ]);
/// assert_eq!(evaluate(&expression), Ok(16.0));
///
/// let expression = Expression::from(vec![
///     Token::Number(6.0),
///     Token::Operator(Operator::Divide),
///     Token::Number(0.0),
/// ]);
/// assert_eq!(evaluate(&expression), Err(EvaluationError::DivideByZero));
/// ```
pub fn evaluate(expression: &Expression) -> Result<f64, EvaluationError> {
    let tokens = expression.tokens();

    let Some(first) = tokens.first() else {
        return Err(EvaluationError::EmptyExpression);
    };
    let Token::Number(mut accumulator) = *first else {
        return Ok(0.0);
    };

    for pair in tokens[1..].chunks_exact(2) {
        let (Token::Operator(op), Token::Number(operand)) = (pair[0], pair[1]) else {
            break;
        };
        accumulator = op.apply(accumulator, operand)?;
    }

    Ok(accumulator)
}
