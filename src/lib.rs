//! # expression-solver
//!
//! expression-solver evaluates integer arithmetic expressions written with
//! `+ - * / ^` and parentheses. It tokenizes, parses and evaluates each
//! expression, and can report every intermediate reduction step to a
//! caller-supplied trace sink.

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

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::core::Evaluator, lexer::tokenize, parser::core::parse},
    trace::{NullSink, Trace, TraceSink},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` tree, the `Node` kinds stored in its
/// arena, and the `BinaryOperator` type. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the literal and binary-operation node types.
/// - Stores nodes children first so the tree is walked without recursion.
/// - Carries operator precedence and associativity.
/// - Prints a tree back as source text with minimal parentheses.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised by a single evaluation.
/// Each phase has its own error enum; `EvalError` wraps them for callers.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the phases of expression evaluation.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Human-readable reporting and leveled logging.
///
/// Formats `expr = result` lines and writes log records, including the
/// evaluation trace, to the console and a log file.
pub mod report;
/// Evaluation traces.
///
/// Defines the reduction-step record and the sink trait the evaluator reports
/// to.
pub mod trace;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses an expression into its syntax tree without evaluating it.
///
/// # Errors
/// Returns [`EvalError::Lex`] or [`EvalError::Parse`] on malformed input.
///
/// # Examples
/// ```
/// use expression_solver::parse_expression_str;
///
/// let expr = parse_expression_str("1 + 2 * 3").unwrap();
/// assert_eq!(expr.to_string(), "1+2*3");
/// assert_eq!(expr.operation_count(), 2);
/// ```
pub fn parse_expression_str(expression: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(expression)?;
    Ok(parse(&tokens)?)
}

/// Evaluates an expression and returns its integer value.
///
/// The reduction steps are discarded; use [`evaluate_with`] or
/// [`evaluate_traced`] to keep them.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. No partial result
/// is produced.
///
/// # Examples
/// ```
/// use expression_solver::{
///     error::{EvalError, RuntimeError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7);
/// assert_eq!(evaluate("4(9 / 1)").unwrap(), 36);
/// assert_eq!(evaluate("2^3^2").unwrap(), 512);
///
/// let err = evaluate("5 / 0").unwrap_err();
/// assert!(matches!(err, EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
/// ```
pub fn evaluate(expression: &str) -> Result<i64, EvalError> {
    evaluate_with(expression, &mut NullSink)
}

/// Evaluates an expression, reporting each reduction step to `sink`.
///
/// Steps are reported in evaluation order. If evaluation fails, the sink has
/// received every step that completed before the failure.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
pub fn evaluate_with(expression: &str, sink: &mut dyn TraceSink) -> Result<i64, EvalError> {
    let expr = parse_expression_str(expression)?;
    Ok(Evaluator::new(sink).eval(&expr)?)
}

/// Evaluates an expression and returns its value together with the full
/// trace of reduction steps.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use expression_solver::evaluate_traced;
///
/// let (value, trace) = evaluate_traced("(2 - 4)(9 * 0)").unwrap();
/// assert_eq!(value, 0);
///
/// let steps: Vec<String> = trace.iter().map(|e| e.expression()).collect();
/// assert_eq!(steps, ["2-4", "9*0", "-2*0"]);
/// ```
pub fn evaluate_traced(expression: &str) -> Result<(i64, Trace), EvalError> {
    let mut trace = Trace::new();
    let value = evaluate_with(expression, &mut trace)?;
    Ok((value, trace))
}
