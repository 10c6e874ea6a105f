/// Core parsing entry point.
///
/// Contains the top of the expression grammar and the shared parse result
/// type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for the four arithmetic operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `+`/`-`, literals, variables, function calls, and
/// parenthesized groupings.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides the shared comma-separated list helper used by argument lists.
pub mod utils;
