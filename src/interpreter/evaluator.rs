/// Core evaluation logic.
///
/// Contains the `Evaluator`, its output sink and call-depth bookkeeping, and
/// the per-statement and per-expression dispatch.
pub mod core;

/// Binary operator evaluation.
///
/// Implements comparison, additive and multiplicative operators over
/// floating-point operands.
pub mod binary;

/// Function evaluation.
///
/// Handles the built-in `print`, user-defined calls, argument checking and
/// call environments.
pub mod function;

/// Utility functions for the evaluator.
///
/// Value extraction, truthiness and literal lookup shared by the other
/// evaluator modules.
pub mod utils;
