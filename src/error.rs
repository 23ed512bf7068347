/// Lexing errors.
///
/// Raised by the lexer when the source text contains a character that does
/// not start any token of the language.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// a syntax tree: unexpected tokens, missing delimiters and unterminated
/// token streams.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined names, calls to non-functions and argument count mismatches.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
