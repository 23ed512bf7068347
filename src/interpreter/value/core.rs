use std::rc::Rc;

use crate::{ast::FunctionDef, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Numbers and functions share one namespace: assigning a number to a name
/// that held a function replaces the function, and vice versa.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A user-defined function. The definition is shared, not copied.
    Function(Rc<FunctionDef>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is a
    /// function.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use mosho::interpreter::value::core::Value;
    ///
    /// let x = Value::Number(10.0);
    ///
    /// assert_eq!(x.as_number(1).unwrap(), 10.0);
    /// ```
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Function(_) => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Returns `true` if the value is a function.
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Debug keeps the fractional part: `7.0`, not `7`.
            Self::Number(n) => write!(f, "{n:?}"),
            Self::Function(def) => write!(f, "<function {}>", def.name),
        }
    }
}

/// What evaluating a node produces.
///
/// Most nodes produce a single `Value`. Assignments, loops, definitions,
/// `print` and untaken `if`s produce `Unit`. A taken `if` produces the
/// outcomes of its body in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No meaningful value. Distinct from the number zero.
    Unit,
    /// A single value.
    Value(Value),
    /// The ordered outcomes of a body.
    Sequence(Vec<Self>),
}

impl From<Value> for Outcome {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<f64> for Outcome {
    fn from(value: f64) -> Self {
        Self::Value(Value::Number(value))
    }
}

impl Outcome {
    /// Collapses the outcome to the single value it stands for.
    ///
    /// A sequence stands for its last element, so a function whose body ends
    /// in a taken `if` returns the last value of that `if`.
    ///
    /// # Example
    /// ```
    /// use mosho::interpreter::value::core::{Outcome, Value};
    ///
    /// let seq = Outcome::Sequence(vec![1.0.into(), 2.0.into()]);
    ///
    /// assert_eq!(seq.into_value(), Some(Value::Number(2.0)));
    /// assert_eq!(Outcome::Unit.into_value(), None);
    /// ```
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Unit => None,
            Self::Value(value) => Some(value),
            Self::Sequence(mut outcomes) => outcomes.pop().and_then(Self::into_value),
        }
    }

    /// Lists every value inside the outcome in evaluation order, descending
    /// into sequences and skipping units.
    ///
    /// This is what a REPL prints for one evaluated construct.
    #[must_use]
    pub fn values(&self) -> Vec<&Value> {
        let mut found = Vec::new();
        self.collect_values(&mut found);
        found
    }

    fn collect_values<'a>(&'a self, found: &mut Vec<&'a Value>) {
        match self {
            Self::Unit => {},
            Self::Value(value) => found.push(value),
            Self::Sequence(outcomes) => {
                for outcome in outcomes {
                    outcome.collect_values(found);
                }
            },
        }
    }
}
