/// The evaluator module reduces an expression tree to a number.
///
/// # Responsibilities
/// - Evaluates tree nodes in post-order.
/// - Promotes integers to reals in mixed arithmetic.
/// - Reports division by zero, overflow and malformed trees.
pub mod evaluator;
/// The lexer module classifies source text into glyphs.
///
/// This is the first stage: every code point of the input is mapped to a
/// symbolic category, or rejected as unrecognized.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// # Responsibilities
/// - Nests the token stream by parentheses.
/// - Validates operator/operand alternation.
/// - Combines operands by precedence and associativity.
pub mod parser;
/// The tokenizer module folds glyphs into tokens.
///
/// It drops whitespace, assembles numeric literals and decides whether each
/// `-` is a subtraction or a unary negation.
pub mod tokenizer;
/// The value module defines the numeric result type.
pub mod value;
