/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree against an environment, performs
/// arithmetic and comparisons, binds variables and functions, runs `if` and
/// `while` bodies, and calls functions. It owns the sink that `print` writes
/// to.
///
/// # Responsibilities
/// - Evaluates every statement and expression node.
/// - Builds call environments and enforces the call-depth limit.
/// - Reports runtime errors such as undefined names and arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the ordered token
/// sequence, each token tagged with the line it starts on. This is the first
/// stage of interpretation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead, plus one more to
/// tell an assignment from an expression starting with a name.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
