use std::mem;

use crate::interpreter::value::core::Number;

/// Binary operators supported by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Binding strength of a binary operator. Higher levels combine first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// `+` and `-`.
    Additive,
    /// `*` and `/`.
    Multiplicative,
}

impl Precedence {
    /// All levels, from the tightest binding to the loosest.
    pub const DESCENDING: [Self; 2] = [Self::Multiplicative, Self::Additive];
}

impl BinaryOperator {
    /// Returns the precedence level the operator belongs to.
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div => Precedence::Multiplicative,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// One element of a parenthesis-nested operation sequence.
///
/// The operation builder produces a flat `Vec<Operation>` per nesting level:
/// operators and operands in source order, where each parenthesized group is
/// an operand owning its own sequence. Nothing about precedence is decided at
/// this level.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// A binary operator.
    Operator {
        /// The operator.
        op:       BinaryOperator,
        /// Position of the operator in the input.
        position: usize,
    },
    /// A value, or a group that evaluates to one.
    Operand(Operand),
}

/// An operand of an [`Operation`] sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A numeric literal, already carrying any unary minus.
    Number {
        /// The literal value.
        value:    Number,
        /// Position where the literal (or its minus sign) starts.
        position: usize,
    },
    /// A parenthesized group.
    Group {
        /// The operations between the parentheses.
        operations: Vec<Operation>,
        /// Whether a unary minus preceded the opening parenthesis.
        negated:    bool,
        /// Position of the opening parenthesis.
        position:   usize,
    },
}

impl Operand {
    /// Returns the position where the operand starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. } | Self::Group { position, .. } => *position,
        }
    }
}

/// A binary expression tree whose shape encodes precedence and associativity.
///
/// Each branch node exclusively owns its two children and remembers the
/// position of its operator for error reporting.
///
/// A chain like `1 + 1 + ... + 1` yields a tree as deep as the chain is long,
/// so nothing walks a tree by recursion: traversals keep their own stack, and
/// dropping a tree detaches its subtrees one at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Expression {
    /// Placeholder left behind while folding a sequence into a tree. Never
    /// part of a finished tree.
    #[default]
    Empty,
    /// A numeric leaf.
    Number(Number),
    /// `left + right`
    Add {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: usize,
    },
    /// `left - right`
    Subtract {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: usize,
    },
    /// `left * right`
    Multiply {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: usize,
    },
    /// `left / right`
    Divide {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: usize,
    },
}

impl Expression {
    /// Builds the branch node for `op`.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expression},
    ///     interpreter::value::core::Number,
    /// };
    ///
    /// let sum = Expression::binary(BinaryOperator::Add,
    ///                              Expression::Number(Number::Integer(1)),
    ///                              Expression::Number(Number::Integer(2)),
    ///                              2);
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self, position: usize) -> Self {
        let left = Box::new(left);
        let right = Box::new(right);
        match op {
            BinaryOperator::Add => Self::Add { left, right, position },
            BinaryOperator::Sub => Self::Subtract { left, right, position },
            BinaryOperator::Mul => Self::Multiply { left, right, position },
            BinaryOperator::Div => Self::Divide { left, right, position },
        }
    }

    /// Wraps the expression into a multiplication by `-1`.
    ///
    /// `position` is the position of the negated group's opening parenthesis.
    #[must_use]
    pub fn negated(self, position: usize) -> Self {
        Self::binary(BinaryOperator::Mul, Self::Number(Number::Integer(-1)), self, position)
    }

    /// Splits a branch node into its operator, children and position.
    ///
    /// Returns `None` for leaves and for the empty placeholder.
    #[must_use]
    pub fn as_binary(&self) -> Option<(BinaryOperator, &Self, &Self, usize)> {
        match self {
            Self::Empty | Self::Number(_) => None,
            Self::Add { left, right, position } => {
                Some((BinaryOperator::Add, left.as_ref(), right.as_ref(), *position))
            },
            Self::Subtract { left, right, position } => {
                Some((BinaryOperator::Sub, left.as_ref(), right.as_ref(), *position))
            },
            Self::Multiply { left, right, position } => {
                Some((BinaryOperator::Mul, left.as_ref(), right.as_ref(), *position))
            },
            Self::Divide { left, right, position } => {
                Some((BinaryOperator::Div, left.as_ref(), right.as_ref(), *position))
            },
        }
    }

    /// Borrows the children of a branch node mutably.
    fn children_mut(&mut self) -> Option<(&mut Self, &mut Self)> {
        match self {
            Self::Empty | Self::Number(_) => None,
            Self::Add { left, right, .. }
            | Self::Subtract { left, right, .. }
            | Self::Multiply { left, right, .. }
            | Self::Divide { left, right, .. } => Some((left.as_mut(), right.as_mut())),
        }
    }

    /// Moves the branch children of this node onto `detached`, leaving
    /// placeholders behind.
    fn detach_branches(&mut self, detached: &mut Vec<Self>) {
        if let Some((left, right)) = self.children_mut() {
            for child in [left, right] {
                if child.as_binary().is_some() {
                    detached.push(mem::take(child));
                }
            }
        }
    }

    /// Returns `true` if the placeholder occurs anywhere in the tree.
    #[must_use]
    pub fn contains_empty(&self) -> bool {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            match node {
                Self::Empty => return true,
                Self::Number(_) => {},
                _ => {
                    if let Some((_, left, right, _)) = node.as_binary() {
                        pending.push(right);
                        pending.push(left);
                    }
                },
            }
        }
        false
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_branches(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_branches(&mut detached);
        }
    }
}

/// Pieces of the rendered form still to be written.
enum Piece<'a> {
    Tree(&'a Expression),
    Operator(BinaryOperator),
    Close,
}

/// Renders the tree fully parenthesized, e.g. `((1 + (2 * 3)) - 4)`.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pieces = vec![Piece::Tree(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Tree(Self::Empty) => write!(f, "<empty>")?,
                Piece::Tree(Self::Number(n)) => write!(f, "{n}")?,
                Piece::Tree(node) => {
                    if let Some((op, left, right, _)) = node.as_binary() {
                        write!(f, "(")?;
                        pieces.push(Piece::Close);
                        pieces.push(Piece::Tree(right));
                        pieces.push(Piece::Operator(op));
                        pieces.push(Piece::Tree(left));
                    }
                },
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}
