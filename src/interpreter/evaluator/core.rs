use std::str::FromStr;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expression},
    error::EvaluationError,
    interpreter::value::core::Number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// How dividing an integer by an integer is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DivisionMode {
    /// The quotient is always real: `6 / 3` is `2.0`, `7 / 2` is `3.5`.
    #[default]
    Real,
    /// The quotient stays integer when the division is exact: `6 / 3` is `2`,
    /// `7 / 2` is `3.5`.
    Exact,
    /// Integer division truncating toward zero: `7 / 2` is `3`.
    Truncate,
}

/// How integer arithmetic that leaves the `i64` range is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowMode {
    /// The operation, or the literal, falls back to real arithmetic.
    #[default]
    Promote,
    /// The calculation fails.
    Fail,
}

impl FromStr for DivisionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "real" => Ok(Self::Real),
            "exact" => Ok(Self::Exact),
            "truncate" => Ok(Self::Truncate),
            _ => Err(format!("unknown division mode '{s}', expected real, exact or truncate")),
        }
    }
}

impl std::fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Exact => write!(f, "exact"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

impl FromStr for OverflowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "promote" => Ok(Self::Promote),
            "fail" => Ok(Self::Fail),
            _ => Err(format!("unknown overflow mode '{s}', expected promote or fail")),
        }
    }
}

impl std::fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Promote => write!(f, "promote"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Pending work of an evaluation: a subtree still to be visited, or an
/// operator waiting for the values of both of its subtrees.
enum Step<'a> {
    Visit(&'a Expression),
    Apply(BinaryOperator, usize),
}

/// Stores the numeric policies of a calculation.
///
/// ## Usage
///
/// A `Context` carries no state between calculations; the same value can be
/// reused for any number of inputs. [`Context::default`] matches what
/// [`crate::calculate`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    /// Treatment of integer/integer division.
    pub division: DivisionMode,
    /// Treatment of integer overflow, in literals and in arithmetic.
    pub overflow: OverflowMode,
}

impl Context {
    /// Creates a context with the default policies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the division policy.
    #[must_use]
    pub const fn with_division(mut self, division: DivisionMode) -> Self {
        self.division = division;
        self
    }

    /// Replaces the overflow policy.
    #[must_use]
    pub const fn with_overflow(mut self, overflow: OverflowMode) -> Self {
        self.overflow = overflow;
        self
    }

    /// Evaluates an expression tree and returns the resulting number.
    ///
    /// Post-order: the left child is evaluated before the right one, then the
    /// operator is applied with integer/real promotion. The walk keeps its own
    /// stack, so tree depth is limited by memory only.
    ///
    /// # Errors
    /// - `DivisionByZero` when a divisor evaluates to zero.
    /// - `IntegerOverflow` when integer arithmetic overflows and the context
    ///   says [`OverflowMode::Fail`].
    /// - `MalformedTree` when the tree still contains [`Expression::Empty`].
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expression},
    ///     interpreter::{evaluator::core::Context, value::core::Number},
    /// };
    ///
    /// let tree = Expression::binary(BinaryOperator::Div,
    ///                               Expression::Number(Number::Integer(7)),
    ///                               Expression::Number(Number::Integer(2)),
    ///                               2);
    /// assert_eq!(Context::new().evaluate(&tree), Ok(Number::Real(3.5)));
    /// ```
    pub fn evaluate(&self, expr: &Expression) -> EvalResult<Number> {
        let mut steps = vec![Step::Visit(expr)];
        let mut values = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expression::Empty) => return Err(EvaluationError::MalformedTree),
                Step::Visit(Expression::Number(n)) => values.push(*n),
                Step::Visit(node) => {
                    let (op, left, right, position) =
                        node.as_binary().ok_or(EvaluationError::MalformedTree)?;
                    steps.push(Step::Apply(op, position));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                },
                Step::Apply(op, position) => {
                    let right = values.pop().ok_or(EvaluationError::MalformedTree)?;
                    let left = values.pop().ok_or(EvaluationError::MalformedTree)?;
                    let result = self.eval_scalar_op(op, left, right, position)?;
                    trace!(%left, %op, %right, %result, "applied operator");
                    values.push(result);
                },
            }
        }

        values.pop().ok_or(EvaluationError::MalformedTree)
    }
}

/// Evaluates an expression tree with the default [`Context`].
///
/// # Errors
/// See [`Context::evaluate`].
pub fn evaluate(expr: &Expression) -> EvalResult<Number> {
    Context::default().evaluate(expr)
}
