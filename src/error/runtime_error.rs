#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvaluationError {
    /// The divisor of a division evaluated to zero.
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// Integer arithmetic overflowed and the context forbids falling back to
    /// reals.
    IntegerOverflow {
        /// Position of the overflowing operator.
        position: usize,
    },
    /// An empty placeholder node reached evaluation. This is a bug in the
    /// expression builder, never the result of user input.
    MalformedTree,
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::IntegerOverflow { position } => {
                write!(f, "Error at position {position}: Integer overflow.")
            },
            Self::MalformedTree => {
                write!(f, "Internal error: Expression tree contains an empty node.")
            },
        }
    }
}

impl std::error::Error for EvaluationError {}
