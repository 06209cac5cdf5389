//! # abacus
//!
//! abacus is a small arithmetic evaluator written in Rust. At its core is a
//! stateless [`Calculator`](calculator::Calculator) that adds, subtracts,
//! multiplies and divides `f64` operands and reports division by zero as an
//! error. Around it sits an infix expression front end that parses text such
//! as `-(2 + 3) * 0.5` and evaluates it through the calculator.

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
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::{parse_program, parse_single},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type. The
/// AST is built by the parser and traversed by the evaluator; the operator
/// enum is shared with the calculator.
pub mod ast;
/// The arithmetic core.
///
/// Provides the stateless `Calculator` with the four basic operations and the
/// single failure they can produce, division by zero.
pub mod calculator;
/// Provides unified error types for arithmetic, parsing and evaluation.
///
/// Every error carries enough information for a caller to present it: parse
/// and runtime errors include the source line where the failure occurred.
pub mod error;
/// Orchestrates the evaluation of source text.
///
/// Ties together lexing, parsing and evaluation to provide the expression
/// front end on top of the calculator.
pub mod interpreter;
/// General utilities for numeric conversion and approximate comparison.
pub mod util;

/// Evaluates a source that holds exactly one expression.
///
/// Blank lines and comments around the expression are allowed.
///
/// # Errors
/// Returns a parse error if the source is empty, malformed or holds more than
/// one expression, and a runtime error if evaluation fails.
///
/// # Examples
/// ```
/// use abacus::{error::Error, evaluate_expression};
///
/// assert_eq!(evaluate_expression("6 / 2").unwrap(), 3.0);
/// assert_eq!(evaluate_expression("-(2 + 3) * 2").unwrap(), -10.0);
///
/// let err = evaluate_expression("5 / 0").unwrap_err();
/// assert!(matches!(err, Error::Runtime(_)));
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    let expr = parse_single(&tokens)?;
    let value = Context::new().eval(&expr)?;
    debug!(value, "evaluated expression");
    Ok(value)
}

/// Evaluates every non-empty line of `source` as its own expression.
///
/// The whole source is parsed before anything is evaluated, so a syntax error
/// on any line means no results are produced.
///
/// # Errors
/// Returns the first parse error, or the first runtime error in line order.
///
/// # Examples
/// ```
/// use abacus::evaluate;
///
/// let results = evaluate("2 + 3\n// comment\n5 - 3").unwrap();
/// assert_eq!(results, vec![5.0, 2.0]);
///
/// assert!(evaluate("1 + 1\n1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Vec<f64>, Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;
    debug!(expressions = program.len(), "parsed source");
    Ok(Context::new().eval_program(&program)?)
}
