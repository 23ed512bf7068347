#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// The token encountered instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input inside an unfinished construct.
    UnexpectedEndOfInput {
        /// Description of what the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token stream ran out without an end-of-input marker.
    MissingEndOfInput {
        /// The line of the last token seen.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { expected, line } => {
                write!(f, "Error on line {line}: Expected {expected}, found end of input.")
            },
            Self::MissingEndOfInput { line } => write!(f,
                                                       "Error on line {line}: Token stream is not terminated by end of input."),
        }
    }
}

impl ParseError {
    /// Returns `true` if more input could have completed the construct.
    ///
    /// Interactive front ends use this to keep reading lines instead of
    /// reporting an error.
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::UnexpectedEndOfInput { .. })
    }
}

impl std::error::Error for ParseError {}
