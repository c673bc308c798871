use std::mem;

use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expression, Operand, Operation, Precedence},
    error::ExpressionError,
};

/// Result type used by the expression builder.
pub type ExpressionResult<T> = Result<T, ExpressionError>;

/// Operands and operators of one nesting level, after validation.
///
/// Always holds exactly one more operand than operators; operator `i` sits
/// between operands `i` and `i + 1`.
struct Chain {
    operands:  Vec<Expression>,
    operators: Vec<(BinaryOperator, usize)>,
}

/// Builds the expression tree of an operation sequence.
///
/// Works in two phases per nesting level:
///
/// 1. Every operand is materialized into its own tree: numbers become leaves,
///    groups are built recursively and negated groups are multiplied by `-1`.
///    Alternation of operands and operators is validated on the way.
/// 2. The chain is collapsed one precedence level at a time, tightest first.
///    Within a level, pairs combine from left to right, which makes all
///    operators left-associative. Each level takes one linear pass.
///
/// # Errors
/// - `MissingOperand` if the sequence starts or ends with an operator, or two
///   operators are adjacent.
/// - `MissingOperator` if two operands are adjacent.
/// - `EmptyExpression` for an empty group or empty input.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     evaluator::core::OverflowMode,
///     lexer::classify,
///     parser::{expression::build_expression, operation::build_operations},
///     tokenizer::tokenize,
/// };
///
/// let tokens = tokenize(&classify("10 - 2 - 3 * 4").unwrap(), OverflowMode::Promote).unwrap();
/// let tree = build_expression(&build_operations(&tokens).unwrap()).unwrap();
///
/// assert_eq!(tree.to_string(), "((10 - 2) - (3 * 4))");
/// ```
pub fn build_expression(operations: &[Operation]) -> ExpressionResult<Expression> {
    build_level(operations, None)
}

/// Builds one nesting level. `group` is the position of the enclosing `(`.
fn build_level(operations: &[Operation], group: Option<usize>) -> ExpressionResult<Expression> {
    let chain = collect_chain(operations, group)?;
    let tree = combine(chain);

    debug_assert!(!tree.contains_empty());
    Ok(tree)
}

/// Phase 1: materializes operands and validates alternation.
fn collect_chain(operations: &[Operation], group: Option<usize>) -> ExpressionResult<Chain> {
    let mut operands = Vec::with_capacity(operations.len() / 2 + 1);
    let mut operators = Vec::with_capacity(operations.len() / 2);
    let mut expect_operand = true;

    for operation in operations {
        match operation {
            Operation::Operand(operand) => {
                if !expect_operand {
                    return Err(ExpressionError::MissingOperator { position: operand.position() });
                }
                operands.push(materialize(operand)?);
                expect_operand = false;
            },
            Operation::Operator { op, position } => {
                if expect_operand {
                    return Err(ExpressionError::MissingOperand { position: *position });
                }
                operators.push((*op, *position));
                expect_operand = true;
            },
        }
    }

    if let Some((_, position)) = operators.last()
       && expect_operand
    {
        return Err(ExpressionError::MissingOperand { position: *position });
    }
    if operands.is_empty() {
        return Err(ExpressionError::EmptyExpression { position: group });
    }

    Ok(Chain { operands, operators })
}

/// Turns a single operand into its terminal expression.
fn materialize(operand: &Operand) -> ExpressionResult<Expression> {
    match operand {
        Operand::Number { value, .. } => Ok(Expression::Number(*value)),
        Operand::Group { operations,
                         negated,
                         position, } => {
            let inner = build_level(operations, Some(*position))?;
            Ok(if *negated { inner.negated(*position) } else { inner })
        },
    }
}

/// Phase 2: collapses the chain into a single tree, one precedence level at a
/// time.
fn combine(chain: Chain) -> Expression {
    let chain = Precedence::DESCENDING.into_iter().fold(chain, collapse);
    chain.operands.into_iter().next().unwrap_or_default()
}

/// Rebuilds the chain with every operator of `level` folded into a branch
/// node together with its two neighbours.
///
/// A single left-to-right pass: the running operand absorbs each following
/// operand joined by an operator of `level`, which makes the level
/// left-associative.
fn collapse(chain: Chain, level: Precedence) -> Chain {
    let Chain { operands, operators } = chain;
    let mut rest = operands.into_iter();
    let mut kept_operands = Vec::with_capacity(rest.len());
    let mut kept_operators = Vec::with_capacity(operators.len());
    let mut current = rest.next().unwrap_or_default();

    for ((op, position), right) in operators.into_iter().zip(rest) {
        if op.precedence() == level {
            current = Expression::binary(op, current, right, position);
            trace!(%op, position, ?level, "combined pair");
        } else {
            kept_operands.push(mem::replace(&mut current, right));
            kept_operators.push((op, position));
        }
    }
    kept_operands.push(current);

    Chain { operands:  kept_operands,
            operators: kept_operators, }
}
