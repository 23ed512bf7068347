use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, unexpected},
        },
    },
};

/// Parses a body delimited by braces.
///
/// A body consists of zero or more statements or expressions. Parsing
/// continues until a closing `}` token is encountered.
///
/// Grammar: `body := "{" (statement | expression)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements of the body, in order.
///
/// # Errors
/// - `UnexpectedToken` if the opening `{` is missing or input ends before the
///   closing `}`.
/// - Propagates any errors from statement parsing.
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBrace)?;
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::EndOfInput, end)) => {
                return Err(unexpected("'}'", &Token::EndOfInput, *end));
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::MissingEndOfInput { line }),
        }
    }

    Ok(statements)
}
