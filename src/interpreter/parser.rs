/// Operation building.
///
/// Consumes the flat token stream and nests it by parentheses. This is the
/// only stage that introduces nesting from syntax rather than precedence.
pub mod operation;

/// Expression building.
///
/// Turns a nested operation sequence into a binary tree that honors operator
/// precedence and left associativity.
pub mod expression;
