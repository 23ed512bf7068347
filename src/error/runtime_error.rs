#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A variable or function name has no binding.
    UndefinedName {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call targeted a name bound to something other than a function.
    NotCallable {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator appeared in a node of the wrong precedence level.
    InvalidOperator {
        /// The operator symbol.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A numeric value was expected, but a function was found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression that produces no value was used where one is required.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls nested deeper than the configured limit.
    RecursionLimit {
        /// The limit that was exceeded.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Writing `print` output failed.
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedName { name, line } => {
                write!(f, "Error on line {line}: Undefined name '{name}'.")
            },
            Self::NotCallable { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Function '{name}' takes {expected} argument(s) but {found} were supplied."),
            Self::InvalidOperator { operator, line } => {
                write!(f, "Error on line {line}: Invalid operator '{operator}'.")
            },
            Self::ExpectedNumber { line } => write!(f, "Error on line {line}: Expected number."),
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::RecursionLimit { limit, line } => write!(f,
                                                           "Error on line {line}: Maximum call depth of {limit} exceeded."),
            Self::Output { source, line } => {
                write!(f, "Error on line {line}: Failed to write output: {source}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}
