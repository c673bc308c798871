use crate::{
    ast::{Operand, Operation},
    error::OperationError,
    interpreter::tokenizer::Token,
};

/// Result type used by the operation builder.
pub type OperationResult<T> = Result<T, OperationError>;

/// Deepest parenthesis nesting accepted by [`build_operations`].
///
/// Building and materializing groups recurses once per level, so the limit
/// bounds the stack used by the front end.
pub const MAX_NESTING: usize = 256;

/// Groups a token stream by parentheses.
///
/// Numbers become [`Operand::Number`], operator tokens become
/// [`Operation::Operator`], and everything between a `(` and its matching `)`
/// becomes one [`Operand::Group`] owning its own operation sequence. Operators
/// and operands are not checked for proper alternation here.
///
/// # Errors
/// - `UnmatchedParenthesis` for a `)` without an open group, or for a `(`
///   still open at the end of input.
/// - `NestingTooDeep` for a `(` nested more than [`MAX_NESTING`] levels deep.
///
/// # Example
/// ```
/// use reckon::{
///     ast::{Operand, Operation},
///     interpreter::{
///         evaluator::core::OverflowMode, lexer::classify, parser::operation::build_operations,
///         tokenizer::tokenize,
///     },
/// };
///
/// let tokens = tokenize(&classify("2 * (3)").unwrap(), OverflowMode::Promote).unwrap();
/// let operations = build_operations(&tokens).unwrap();
///
/// assert_eq!(operations.len(), 3);
/// assert!(matches!(operations[2], Operation::Operand(Operand::Group { negated: false, .. })));
/// ```
pub fn build_operations(tokens: &[(Token, usize)]) -> OperationResult<Vec<Operation>> {
    parse_operations(&mut tokens.iter(), None, 0)
}

/// Builds the operation sequence of one nesting level.
///
/// `open` is the position of the `(` that started this level, `None` at the
/// top; `depth` counts the groups enclosing it. The level ends at its matching
/// `)` or, at the top, at end of input.
fn parse_operations<'a, I>(tokens: &mut I,
                           open: Option<usize>,
                           depth: usize)
                           -> OperationResult<Vec<Operation>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut operations = Vec::new();

    loop {
        match tokens.next() {
            Some((Token::Number(value), position)) => {
                operations.push(Operation::Operand(Operand::Number { value:    *value,
                                                                     position: *position, }));
            },
            Some((Token::LParen { negated }, position)) => {
                if depth == MAX_NESTING {
                    return Err(OperationError::NestingTooDeep { position: *position });
                }
                let group = parse_operations(tokens, Some(*position), depth + 1)?;
                operations.push(Operation::Operand(Operand::Group { operations: group,
                                                                    negated:    *negated,
                                                                    position:   *position, }));
            },
            Some((Token::RParen, position)) => {
                return match open {
                    Some(_) => Ok(operations),
                    None => Err(OperationError::UnmatchedParenthesis { symbol:   ')',
                                                                       position: *position, }),
                };
            },
            Some((token, position)) => {
                if let Some(op) = token.binary_operator() {
                    operations.push(Operation::Operator { op,
                                                          position: *position });
                }
            },
            None => {
                return match open {
                    Some(position) => {
                        Err(OperationError::UnmatchedParenthesis { symbol: '(', position })
                    },
                    None => Ok(operations),
                };
            },
        }
    }
}
