use std::iter::Peekable;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds the error for finding `found` where `expected` was required.
///
/// Running into `Token::EndOfInput` gets its own variant so callers can tell
/// truncated input from wrong input.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 found: &Token,
                                                 line: usize)
                                                 -> ParseError {
    if *found == Token::EndOfInput {
        return ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                  line };
    }
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found: found.to_string(),
                                  line }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token the grammar requires.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` naming both tokens if they differ, or
/// `MissingEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(unexpected(&expected.to_string(), tok, *line)),
        None => Err(ParseError::MissingEndOfInput { line: 0 }),
    }
}

/// Parses a plain identifier and returns its name and line.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `what`: What the identifier names, used in the error message.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              what: &str)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Variable(name), line)) => Ok((name.clone(), *line)),
        Some((tok, line)) => Err(unexpected(what, tok, *line)),
        None => Err(ParseError::MissingEndOfInput { line: 0 }),
    }
}

/// Returns `true` if the upcoming construct is a statement rather than a bare
/// expression.
///
/// A statement starts with `if`, `while`, `mosho`, or an identifier directly
/// followed by `=`. The last case needs a second token of lookahead, taken
/// from a clone of the iterator so nothing is consumed.
pub(in crate::interpreter::parser) fn starts_statement<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    match lookahead.next() {
        Some((Token::If | Token::While | Token::Mosho, _)) => true,
        Some((Token::Variable(_), _)) => matches!(lookahead.next(), Some((Token::Assign, _))),
        _ => false,
    }
}

/// Peeks at the next token and classifies it as an operator of one level.
///
/// Returns the operator and its line without consuming anything, or `None`
/// if the token is not an operator accepted by `classify`.
pub(in crate::interpreter::parser) fn peek_operator<'a, I>(tokens: &mut Peekable<I>,
                                                           classify: fn(&Token) -> Option<BinaryOperator>)
                                                           -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek()
          .and_then(|(token, line)| classify(token).map(|op| (op, *line)))
}
