#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Numeric edge cases are deliberately absent: division by zero, the square
/// root of a negative number, and out-of-domain `pow` all propagate as
/// IEEE-754 infinities or NaNs, not as errors.
pub enum EvalError {
    /// A unary or binary node carried an operator outside the recognized
    /// set.
    UnsupportedOperator {
        /// The offending operator character.
        op: char,
    },
    /// Called a function outside the builtin set (`pow`, `sin`, `sqrt`).
    UnsupportedFunction {
        /// The offending function name.
        name: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOperator { op } => {
                write!(f, "Unsupported operator '{op}'.")
            },
            Self::UnsupportedFunction { name } => {
                write!(f, "Unsupported function '{name}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
