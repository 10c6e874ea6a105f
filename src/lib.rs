//! # kalkyl
//!
//! kalkyl is a small arithmetic formula evaluator written in Rust.
//! It parses formulas such as `sqrt(A / pi)` into an expression tree and
//! evaluates them against an environment of variable bindings, with support
//! for the builtin functions `pow`, `sin` and `sqrt`.

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
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{evaluator::core::Env, lexer::Token, parser::core::parse_expression},
};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum that represents the syntactic
/// structure of a formula as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all formula constructs.
/// - Keeps operators and function names as open domains so evaluation can
///   report unsupported ones.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating a formula. It standardizes error reporting and carries
/// detailed information about failures, including the offending operator or
/// function name.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the process of formula evaluation.
///
/// This module ties together lexing, parsing, evaluation, and error
/// handling to provide a complete runtime for formula evaluation. It exposes
/// the stages the top-level entry points build on.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a formula into an expression tree.
///
/// The source is tokenized and parsed as a single expression; any input
/// remaining after a complete expression is an error.
///
/// # Errors
/// Returns a [`ParseError`] if the input contains unrecognized characters,
/// is syntactically malformed, ends prematurely, leaves trailing tokens, or
/// calls a builtin function with the wrong number of arguments.
///
/// # Examples
/// ```
/// use kalkyl::parse;
///
/// let expr = parse("sqrt(A / pi)");
/// assert!(expr.is_ok());
///
/// let expr = parse("sqrt(A / pi"); // missing ')'
/// assert!(expr.is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(), });
        }
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some(tok) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"), });
    }

    Ok(expr)
}

/// Returns the result of evaluating a formula against an environment.
///
/// This function parses the formula and evaluates the resulting tree in one
/// step. Variables resolve through `env`; names with no binding yield `0.0`.
///
/// # Errors
/// Returns an error if parsing fails or if the tree carries an unsupported
/// operator or function name.
///
/// # Examples
/// ```
/// use kalkyl::{evaluate, interpreter::evaluator::core::Env};
///
/// let env = Env::from_iter([("x", 9.0), ("y", 10.0)]);
/// let result = evaluate("pow(x, 3) + pow(y, 3)", &env).unwrap();
/// assert_eq!(result, 1729.0);
///
/// // 'tan' is not a builtin, so evaluation fails.
/// let result = evaluate("tan(1)", &env);
/// assert!(result.is_err());
/// ```
pub fn evaluate(source: &str, env: &Env) -> Result<f64, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    Ok(expr.eval(env)?)
}
