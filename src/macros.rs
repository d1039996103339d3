//! Macros for ergonomic expression construction.

/// Build an [`Expression`](crate::core::Expression) from infix notation.
///
/// Numbers must be literals; operators are `+`, `-`, `*` and `/`. The
/// result is evaluated left to right like any other expression.
///
/// # Example
///
/// ```
/// use calcbook::core::evaluate;
/// use calcbook::expression;
///
/// let expression = expression![5 + 3 * 2];
/// assert_eq!(expression.len(), 5);
/// assert_eq!(evaluate(&expression), Ok(16.0));
///
/// let negative = expression![-1.5 - -1.5];
/// assert_eq!(evaluate(&negative), Ok(0.0));
/// ```
#[macro_export]
macro_rules! expression {
    (@op +) => {
        $crate::core::Operator::Add
    };
    (@op -) => {
        $crate::core::Operator::Subtract
    };
    (@op *) => {
        $crate::core::Operator::Multiply
    };
    (@op /) => {
        $crate::core::Operator::Divide
    };

    ($first:literal $($op:tt $number:literal)*) => {{
        let mut expression = $crate::core::Expression::new();
        expression.push_number($first as f64);
        $(
            expression.push_operator($crate::expression!(@op $op));
            expression.push_number($number as f64);
        )*
        expression
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{evaluate, Operator, Token};

    #[test]
    fn single_literal() {
        let expression = expression![10];
        assert_eq!(expression.tokens(), &[Token::Number(10.0)]);
    }

    #[test]
    fn all_operators_map() {
        let expression = expression![1 + 2 - 3 * 4 / 5];
        let operators: Vec<Operator> = expression
            .tokens()
            .iter()
            .filter_map(Token::as_operator)
            .collect();
        assert_eq!(
            operators,
            vec![
                Operator::Add,
                Operator::Subtract,
                Operator::Multiply,
                Operator::Divide,
            ]
        );
        assert_eq!(evaluate(&expression), Ok(0.0));
    }

    #[test]
    fn float_literals() {
        assert_eq!(evaluate(&expression![0.5 * 3]), Ok(1.5));
    }
}
