/// Runtime values and evaluation outcomes.
///
/// Defines `Value`, the thing a name can be bound to, and `Outcome`, what
/// evaluating a node produces: nothing, a value, or the result sequence of a
/// taken `if` body.
pub mod core;
/// Name bindings.
///
/// Defines the `Environment` mapping names to values, and the filtered copy
/// used as a function's call environment.
pub mod environment;
