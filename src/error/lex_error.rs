#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character that does not begin any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The 1-based column of the character within its line.
        column:    usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character,
                                     line,
                                     column, } => write!(f,
                                                         "Error on line {line}: Invalid character {character:?} at column {column}."),
        }
    }
}

impl std::error::Error for LexError {}
