use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Literal},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, peek_operator, unexpected},
        },
    },
};

/// Parses relational and equality operators.
///
/// Handles left-associative operators: `>`, `>=`, `<`, `<=` and `==`.
///
/// The rule is: `comparison := additive ((">" | ">=" | "<" | "<=" | "==")
/// additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Comparison` tree, or the additive expression itself if no
/// comparison operator follows.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens)?;
    while let Some((op, line)) = peek_operator(tokens, comparison_operator) {
        tokens.next();
        let right = parse_additive(tokens)?;
        left = Expr::Comparison { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Term` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    while let Some((op, line)) = peek_operator(tokens, additive_operator) {
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::Term { left: Box::new(left),
                            op,
                            right: Box::new(right),
                            line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := grouping (("*" | "/") grouping)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_grouping(tokens)?;
    while let Some((op, line)) = peek_operator(tokens, multiplicative_operator) {
        tokens.next();
        let right = parse_grouping(tokens)?;
        left = Expr::Factor { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }
    Ok(left)
}

/// Parses a parenthesized expression or falls through to a literal.
///
/// The rule is: `grouping := "(" expression ")" | literal`
///
/// # Errors
/// Returns `UnexpectedToken` if the closing `)` is missing.
pub fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let expr = parse_expression(tokens)?;
        expect(tokens, &Token::RParen)?;

        return Ok(Expr::Grouping { expr: Box::new(expr),
                                   line });
    }

    parse_literal(tokens)
}

/// Parses a number, a variable reference or a function call.
///
/// An identifier is a call only when `(` follows it immediately.
///
/// The rule is: `literal := call | NUMBER | VARIABLE`
///
/// # Errors
/// Returns `UnexpectedToken` if the token cannot start an expression.
pub fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Literal { value: Literal::Number(*n),
                                                             line:  *line, }),
        Some((Token::Variable(name), line)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                return parse_call(tokens, name.clone(), *line);
            }
            Ok(Expr::Literal { value: Literal::Variable(name.clone()),
                               line:  *line, })
        },
        Some((tok, line)) => Err(unexpected("an expression", tok, *line)),
        None => Err(ParseError::MissingEndOfInput { line: 0 }),
    }
}

/// Parses the argument list of a call.
///
/// Arguments are expressions written one after another with no separator,
/// as in `max(a b)`.
///
/// The rule is: `call := VARIABLE "(" expression* ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening `(`.
/// - `name`: The callee name, already consumed.
/// - `line`: Line of the callee name.
///
/// # Errors
/// Returns `UnexpectedToken` if input ends before the closing `)`.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, name: String, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;

    let mut arguments = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some((Token::EndOfInput, end)) => {
                return Err(unexpected("')'", &Token::EndOfInput, *end));
            },
            Some(_) => arguments.push(parse_expression(tokens)?),
            None => return Err(ParseError::MissingEndOfInput { line }),
        }
    }

    Ok(Expr::FunctionCall { name,
                            arguments,
                            line })
}

/// Maps `>`, `>=`, `<`, `<=` and `==` to their operators.
const fn comparison_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        _ => None,
    }
}

/// Maps `+` and `-` to their operators.
const fn additive_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

/// Maps `*` and `/` to their operators.
const fn multiplicative_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
