use std::io::Write;

use crate::{
    ast::{Expr, Literal},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, environment::Environment},
    },
};

impl<W: Write> Evaluator<W> {
    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands, arguments, conditions and assignment right-hand sides all
    /// need a value. A sequence stands for its last element; `Unit` is
    /// reported as `MissingValue`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `environment`: Bindings visible to the expression.
    /// - `line`: Line number for error reporting.
    pub fn eval_value(&mut self,
                      expr: &Expr,
                      environment: &Environment,
                      line: usize)
                      -> EvalResult<Value> {
        self.eval(expr, environment)?
            .into_value()
            .ok_or(RuntimeError::MissingValue { line })
    }

    /// Evaluates a subexpression that must produce a number.
    pub fn eval_number(&mut self,
                       expr: &Expr,
                       environment: &Environment,
                       line: usize)
                       -> EvalResult<f64> {
        self.eval_value(expr, environment, line)?.as_number(line)
    }

    /// Evaluates a condition of an `if` or `while`.
    ///
    /// # Returns
    /// `true` if the condition is a nonzero number.
    pub fn eval_condition(&mut self,
                          condition: &Expr,
                          environment: &Environment,
                          line: usize)
                          -> EvalResult<bool> {
        Ok(is_truthy(self.eval_number(condition, environment, line)?))
    }

    /// Evaluates a literal expression.
    ///
    /// Numbers evaluate to themselves. Variables are looked up in
    /// `environment`; an unbound name is an `UndefinedName` error.
    ///
    /// # Example
    /// ```
    /// use mosho::{
    ///     ast::Literal,
    ///     interpreter::{
    ///         evaluator::core::Evaluator,
    ///         value::{core::Value, environment::Environment},
    ///     },
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Number(10.0));
    ///
    /// let v = Evaluator::<Vec<u8>>::eval_literal(&Literal::from("x"), 1, &env).unwrap();
    /// assert_eq!(v, Value::Number(10.0));
    /// assert!(Evaluator::<Vec<u8>>::eval_literal(&Literal::from("y"), 1, &env).is_err());
    /// ```
    pub fn eval_literal(literal: &Literal,
                        line: usize,
                        environment: &Environment)
                        -> EvalResult<Value> {
        match literal {
            Literal::Number(n) => Ok(Value::Number(*n)),
            Literal::Variable(name) => {
                environment.get(name)
                           .cloned()
                           .ok_or_else(|| RuntimeError::UndefinedName { name: name.clone(),
                                                                       line })
            },
        }
    }
}

/// Truthiness: any nonzero number is true. `NaN` is nonzero.
///
/// ## Example
/// ```
/// use mosho::interpreter::evaluator::utils::is_truthy;
///
/// assert!(is_truthy(1.0));
/// assert!(is_truthy(-0.5));
/// assert!(!is_truthy(0.0));
/// ```
#[must_use]
pub fn is_truthy(n: f64) -> bool {
    n != 0.0
}

/// Converts a relational result into the language's numeric truth value.
#[must_use]
pub const fn truth_value(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}
