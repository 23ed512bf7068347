/// Core parsing entry points.
///
/// Contains the `parse` function turning a token slice into a `Program`, and
/// the expression entry point shared by every other parsing module.
pub mod core;

/// Binary operator parsing.
///
/// Implements the three left-associative precedence levels (comparison,
/// additive, multiplicative) down to groupings, literals and calls.
pub mod binary;

/// Body parsing.
///
/// Parses brace-delimited statement sequences used by `if`, `while` and
/// function definitions.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectation helpers and the statement lookahead check.
pub mod utils;

/// Statement parsing.
///
/// Decides between statements and bare expressions, and parses assignments,
/// conditionals, loops and function definitions.
pub mod statement;
