//! # mosho
//!
//! mosho is a small interpreted scripting language written in Rust.
//! Source text is tokenized, parsed into a syntax tree and evaluated against a
//! mutable environment. The language has floating-point numbers, variables,
//! `if` and `while`, user-defined functions introduced by `mosho`, and a
//! built-in `print`.
//!
//! ```
//! use mosho::{
//!     interpreter::value::{core::Outcome, environment::Environment},
//!     run,
//! };
//!
//! let mut env = Environment::new();
//! run("mosho square: n { n * n }", &mut env).unwrap();
//!
//! let outcomes = run("square(4)", &mut env).unwrap();
//! assert_eq!(outcomes, vec![Outcome::from(16.0)]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    evaluator::core::Evaluator,
    value::{core::Outcome, environment::Environment},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator. Every node carries the line it starts on.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum. Every error carries the source line it
/// occurred on and implements `std::error::Error`, so the phases compose with
/// `?` into a boxed error.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;

pub use interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse};

/// Runs source text against `environment`, printing to standard output.
///
/// Tokenizes, parses and evaluates `source` in one call. Bindings made
/// before a runtime error stay in `environment`.
///
/// # Errors
/// Returns the first lex, parse or runtime error.
///
/// # Examples
/// ```
/// use mosho::{interpreter::value::environment::Environment, run};
///
/// let mut env = Environment::new();
///
/// // Simple expression.
/// assert!(run("x = 2 + 2", &mut env).is_ok());
///
/// // 'y' is not defined.
/// assert!(run("z = y + 1", &mut env).is_err());
/// ```
pub fn run(source: &str, environment: &mut Environment)
           -> Result<Vec<Outcome>, Box<dyn std::error::Error>> {
    run_with(&mut Evaluator::stdout(), source, environment)
}

/// Runs source text with a caller-provided evaluator.
///
/// Use this to capture `print` output or to change the call-depth limit.
///
/// # Errors
/// Returns the first lex, parse or runtime error.
///
/// # Examples
/// ```
/// use mosho::{
///     interpreter::{evaluator::core::Evaluator, value::environment::Environment},
///     run_with,
/// };
///
/// let mut evaluator = Evaluator::new(Vec::new());
/// let mut env = Environment::new();
///
/// run_with(&mut evaluator, "print(1 2)", &mut env).unwrap();
/// assert_eq!(evaluator.output(), b"1.0\n2.0\n");
/// ```
pub fn run_with<W: Write>(evaluator: &mut Evaluator<W>,
                          source: &str,
                          environment: &mut Environment)
                          -> Result<Vec<Outcome>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    Ok(evaluator.eval_program(&program, environment)?)
}
