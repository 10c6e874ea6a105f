/// Core evaluation logic and the binding environment.
///
/// Contains the environment type, the evaluation result alias, and the main
/// dispatch over expression nodes.
pub mod core;

/// Unary operator evaluation.
///
/// Implements the prefix `+` and `-` operators.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators, evaluating both operands
/// independently.
pub mod binary;

/// Builtin function call evaluation.
///
/// Dispatches `pow`, `sin` and `sqrt` to their double-precision
/// implementations.
pub mod call;
