#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected or unrecognized token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
    },
    /// A builtin function was called with the wrong number of arguments.
    WrongArgumentCount {
        /// The name of the function.
        function: String,
        /// The number of arguments the function takes.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::UnexpectedTrailingTokens { token } => {
                write!(f, "Extra tokens after expression. Check your input: {token}")
            },

            Self::WrongArgumentCount { function,
                                       expected,
                                       found, } => {
                write!(f,
                       "Function '{function}' takes {expected} argument(s), but {found} were supplied.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
