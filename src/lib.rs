//! # reckon
//!
//! reckon is an arithmetic expression calculator written in Rust.
//! It turns a line of text such as `1 + 2 * -(3 - 4.5)` into a single number,
//! or explains precisely why the text could not be evaluated.
//!
//! Evaluation runs through five stages, each a pure function whose failure
//! stops the pipeline:
//!
//! 1. [`interpreter::lexer::classify`]: code points to glyphs.
//! 2. [`interpreter::tokenizer::tokenize`]: glyphs to tokens.
//! 3. [`interpreter::parser::operation::build_operations`]: tokens to
//!    parenthesis-nested operations.
//! 4. [`interpreter::parser::expression::build_expression`]: operations to a
//!    precedence-shaped tree.
//! 5. [`interpreter::evaluator::core::Context::evaluate`]: tree to number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::core::Context,
        lexer::classify,
        parser::{expression::build_expression, operation::build_operations},
        tokenizer::tokenize,
        value::core::Number,
    },
};

/// Defines the structure of parsed input.
///
/// This module declares the binary operators, the parenthesis-nested
/// `Operation` sequence and the `Expression` tree handed to the evaluator.
///
/// # Responsibilities
/// - Defines operator precedence.
/// - Attaches input positions to nodes for error reporting.
pub mod ast;
/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised during classification,
/// tokenization, tree building or evaluation, and the `CalcError` union
/// returned by [`calculate`].
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Attaches positions and offending symbols for user feedback.
/// - Integrates with `std::error::Error`.
pub mod error;
/// Orchestrates the stages of a calculation.
///
/// This module ties together the lexer, tokenizer, parser, evaluator and the
/// numeric value type.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// Evaluates an arithmetic expression with the default [`Context`].
///
/// The default context divides integers into reals and falls back to real
/// arithmetic on integer overflow.
///
/// # Errors
/// Returns the error of the first stage that fails; see
/// [`error::ErrorKind`] for the full list.
///
/// # Examples
/// ```
/// use reckon::{calculate, error::ErrorKind, interpreter::value::core::Number};
///
/// assert_eq!(calculate("1 + 2 * 3"), Ok(Number::Integer(7)));
/// assert_eq!(calculate("1 + 2 * 3 + -(4 - 5)"), Ok(Number::Integer(8)));
/// assert_eq!(calculate("10 * (5 - 1) + 2.0"), Ok(Number::Real(42.0)));
///
/// let err = calculate("(3 + 4").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnmatchedParenthesis);
/// ```
pub fn calculate(source: &str) -> Result<Number, CalcError> {
    calculate_with(source, &Context::default())
}

/// Evaluates an arithmetic expression under the policies of `context`.
///
/// # Errors
/// Returns the error of the first stage that fails.
///
/// # Examples
/// ```
/// use reckon::{
///     calculate_with,
///     interpreter::{
///         evaluator::core::{Context, DivisionMode},
///         value::core::Number,
///     },
/// };
///
/// let context = Context::new().with_division(DivisionMode::Truncate);
/// assert_eq!(calculate_with("7 / 2", &context), Ok(Number::Integer(3)));
/// ```
pub fn calculate_with(source: &str, context: &Context) -> Result<Number, CalcError> {
    let result = run_pipeline(source, context);

    match &result {
        Ok(value) => debug!(%value, "calculation succeeded"),
        Err(e) => debug!(kind = %e.kind(), error = %e, "calculation failed"),
    }

    result
}

fn run_pipeline(source: &str, context: &Context) -> Result<Number, CalcError> {
    let glyphs = classify(source)?;
    debug!(glyphs = glyphs.len(), "classified input");

    let tokens = tokenize(&glyphs, context.overflow)?;
    debug!(tokens = tokens.len(), "tokenized input");

    let operations = build_operations(&tokens)?;
    debug!(operations = operations.len(), "built operations");

    let tree = build_expression(&operations)?;
    debug!(%tree, "built expression tree");

    Ok(context.evaluate(&tree)?)
}
