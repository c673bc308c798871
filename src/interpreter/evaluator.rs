/// Core evaluation logic and context management.
///
/// Contains the recursive evaluator, the `Context` holding the numeric
/// policies, and error propagation.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies `+ - * /` to two numbers with promotion, division-by-zero checks
/// and overflow handling.
pub mod binary;
