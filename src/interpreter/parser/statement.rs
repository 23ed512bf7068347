use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_body,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, starts_statement},
        },
    },
};

/// Parses a single statement or bare expression.
///
/// A statement may be one of:
/// - an assignment (`x = ...`),
/// - a conditional (`if ...`),
/// - a loop (`while ...`),
/// - a function definition (`mosho ...`).
///
/// Anything else is parsed as an expression statement. Telling an
/// assignment from an expression that merely starts with a variable takes two
/// tokens of lookahead.
///
/// The statement's source line is taken from the next available token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if !starts_statement(tokens) {
        let current_line = tokens.peek().map_or(0, |(_, l)| *l);
        let expr = parse_expression(tokens)?;

        return Ok(Statement::Expression { expr,
                                          line: current_line });
    }

    match tokens.peek() {
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::Mosho, _)) => parse_function_definition(tokens),
        _ => parse_assignment(tokens),
    }
}

/// Parses an assignment of the form `<identifier> = <expression>`.
///
/// # Errors
/// Returns a `ParseError` if the identifier or `=` is missing, or the
/// expression is malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = parse_identifier(tokens, "variable name")?;
    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { name,
                               value,
                               line })
}

/// Parses an `if` statement.
///
/// Syntax:
/// ```text
///     if <condition> { <statements> }
/// ```
/// There is no `else`; a false condition produces no result.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::If)?;
    let condition = parse_expression(tokens)?;
    let body = parse_body(tokens)?;

    Ok(Statement::If { condition,
                       body,
                       line })
}

/// Parses a `while` loop: `while <condition> { <statements> }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::While)?;
    let condition = parse_expression(tokens)?;
    let body = parse_body(tokens)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     mosho <name>: <param> <param> ... { <statements> }
/// ```
/// Parameters are bare identifiers with no separator. Any token other than
/// an identifier ends the list, and must then be the opening `{`.
///
/// # Errors
/// - `UnexpectedToken` if the name, `:` or `{` is missing.
/// - Propagates any errors from parsing the body.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Mosho)?;
    let (name, _) = parse_identifier(tokens, "function name")?;
    expect(tokens, &Token::Colon)?;

    let mut params = Vec::new();
    while let Some((Token::Variable(param), _)) = tokens.peek() {
        params.push(param.clone());
        tokens.next();
    }

    let body = parse_body(tokens)?;

    Ok(Statement::FunctionDefinition(Rc::new(FunctionDef { name,
                                                           params,
                                                           body,
                                                           line })))
}
