/// Parsing errors.
///
/// Defines the error types of the four front stages: glyph classification,
/// tokenization, operation building and expression building. All of them are
/// detected before evaluation starts.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while reducing an expression tree to a number,
/// such as division by zero or integer overflow.
pub mod runtime_error;

pub use parse_error::{ClassificationError, ExpressionError, OperationError, TokenizationError};
pub use runtime_error::EvaluationError;

/// Names every failure the calculator can report, without the context the
/// error values carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnrecognizedSymbol,
    MalformedNumber,
    LiteralTooLarge,
    UnmatchedParenthesis,
    NestingTooDeep,
    MissingOperand,
    MissingOperator,
    EmptyExpression,
    DivisionByZero,
    IntegerOverflow,
    MalformedTree,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Any failure of the calculation pipeline.
///
/// Each variant wraps the error of exactly one stage. The first failing stage
/// decides the error; later stages never run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The input contained an unsupported code point.
    Classification(ClassificationError),
    /// A numeric literal could not be formed.
    Tokenization(TokenizationError),
    /// Parentheses did not balance or nested too deeply.
    Operation(OperationError),
    /// Operators and operands did not alternate properly.
    Expression(ExpressionError),
    /// The tree could not be reduced to a number.
    Evaluation(EvaluationError),
}

impl CalcError {
    /// Returns the taxonomy entry of this error.
    ///
    /// # Example
    /// ```
    /// use reckon::{calculate, error::ErrorKind};
    ///
    /// let err = calculate("5 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Classification(ClassificationError::UnrecognizedSymbol { .. }) => {
                ErrorKind::UnrecognizedSymbol
            },
            Self::Tokenization(TokenizationError::MalformedNumber { .. }) => {
                ErrorKind::MalformedNumber
            },
            Self::Tokenization(TokenizationError::LiteralTooLarge { .. }) => {
                ErrorKind::LiteralTooLarge
            },
            Self::Operation(OperationError::UnmatchedParenthesis { .. }) => {
                ErrorKind::UnmatchedParenthesis
            },
            Self::Operation(OperationError::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
            Self::Expression(ExpressionError::MissingOperand { .. }) => ErrorKind::MissingOperand,
            Self::Expression(ExpressionError::MissingOperator { .. }) => {
                ErrorKind::MissingOperator
            },
            Self::Expression(ExpressionError::EmptyExpression { .. }) => {
                ErrorKind::EmptyExpression
            },
            Self::Evaluation(EvaluationError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Evaluation(EvaluationError::IntegerOverflow { .. }) => {
                ErrorKind::IntegerOverflow
            },
            Self::Evaluation(EvaluationError::MalformedTree) => ErrorKind::MalformedTree,
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classification(e) => write!(f, "{e}"),
            Self::Tokenization(e) => write!(f, "{e}"),
            Self::Operation(e) => write!(f, "{e}"),
            Self::Expression(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Classification(e) => Some(e),
            Self::Tokenization(e) => Some(e),
            Self::Operation(e) => Some(e),
            Self::Expression(e) => Some(e),
            Self::Evaluation(e) => Some(e),
        }
    }
}

impl From<ClassificationError> for CalcError {
    fn from(e: ClassificationError) -> Self {
        Self::Classification(e)
    }
}

impl From<TokenizationError> for CalcError {
    fn from(e: TokenizationError) -> Self {
        Self::Tokenization(e)
    }
}

impl From<OperationError> for CalcError {
    fn from(e: OperationError) -> Self {
        Self::Operation(e)
    }
}

impl From<ExpressionError> for CalcError {
    fn from(e: ExpressionError) -> Self {
        Self::Expression(e)
    }
}

impl From<EvaluationError> for CalcError {
    fn from(e: EvaluationError) -> Self {
        Self::Evaluation(e)
    }
}
