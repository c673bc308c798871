/// Represents errors raised while classifying the input text into glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// A code point outside the supported symbol set.
    UnrecognizedSymbol {
        /// The offending code point.
        symbol:   char,
        /// Code-point index of the symbol in the input.
        position: usize,
    },
}

impl std::fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedSymbol { symbol, position } => write!(f,
                                                                    "Error at position {position}: Unrecognized symbol {symbol:?}."),
        }
    }
}

impl std::error::Error for ClassificationError {}

/// Represents errors raised while folding glyphs into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizationError {
    /// A numeric literal with more than one decimal separator, or a separator
    /// with no digit on either side.
    MalformedNumber {
        /// Position of the offending separator.
        position: usize,
    },
    /// An integer literal that does not fit into 64 bits.
    LiteralTooLarge {
        /// Position where the literal starts.
        position: usize,
    },
}

impl std::fmt::Display for TokenizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedNumber { position } => {
                write!(f, "Error at position {position}: Malformed number.")
            },
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for TokenizationError {}

/// Represents errors raised while grouping tokens by parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnmatchedParenthesis {
        /// The parenthesis left without a partner.
        symbol:   char,
        /// Position of that parenthesis.
        position: usize,
    },
    /// A `(` nested deeper than
    /// [`MAX_NESTING`](crate::interpreter::parser::operation::MAX_NESTING).
    NestingTooDeep {
        /// Position of the first `(` beyond the limit.
        position: usize,
    },
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedParenthesis { symbol, position } => write!(f,
                                                                      "Error at position {position}: Unmatched parenthesis '{symbol}'."),
            Self::NestingTooDeep { position } => {
                write!(f, "Error at position {position}: Parentheses are nested too deeply.")
            },
        }
    }
}

impl std::error::Error for OperationError {}

/// Represents errors raised while combining operations into an expression
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// An operator at either end of a sequence, or two adjacent operators.
    MissingOperand {
        /// Position of the operator lacking an operand.
        position: usize,
    },
    /// Two operands with no operator between them.
    MissingOperator {
        /// Position of the second operand.
        position: usize,
    },
    /// An empty group `()`, or input without any token at all.
    EmptyExpression {
        /// Position of the empty group, `None` for empty input.
        position: Option<usize>,
    },
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { position } => {
                write!(f, "Error at position {position}: Operator is missing an operand.")
            },
            Self::MissingOperator { position } => write!(f,
                                                         "Error at position {position}: Expected an operator before this operand."),
            Self::EmptyExpression { position: Some(position) } => {
                write!(f, "Error at position {position}: Empty parentheses.")
            },
            Self::EmptyExpression { position: None } => write!(f, "Error: Empty expression."),
        }
    }
}

impl std::error::Error for ExpressionError {}
