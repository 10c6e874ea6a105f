/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing a
/// formula. Parse errors include syntax mistakes, unexpected tokens, and
/// wrong argument counts for the builtin functions.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while evaluating an
/// expression tree: unsupported operators and unsupported function names.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
