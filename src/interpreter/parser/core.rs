use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_comparison, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full token sequence into a [`Program`].
///
/// Line breaks are not significant to the grammar, so `NewLine` tokens are
/// dropped before parsing starts. Parsing stops at the first
/// `Token::EndOfInput`.
///
/// Grammar: `program := (statement | expression)* END_OF_INPUT`
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs as produced by the lexer.
///
/// # Returns
/// The parsed program.
///
/// # Errors
/// - `UnexpectedToken` for any grammar violation.
/// - `MissingEndOfInput` if the slice is not terminated by
///   `Token::EndOfInput`.
///
/// # Example
/// ```
/// use mosho::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("x = 1\nx + 1").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.body.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter()
                         .filter(|(token, _)| *token != Token::NewLine)
                         .peekable();

    let mut body = Vec::new();
    loop {
        match iter.peek() {
            Some((Token::EndOfInput, _)) => break,
            Some(_) => body.push(parse_statement(&mut iter)?),
            None => return Err(ParseError::MissingEndOfInput { line: last_line }),
        }
    }

    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens)
}
