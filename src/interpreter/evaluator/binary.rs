use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::truth_value,
        },
        value::environment::Environment,
    },
};

impl<W: Write> Evaluator<W> {
    /// Evaluates a comparison node. The left operand is evaluated first.
    ///
    /// Operand errors carry the operand's own line; `line` is used for the
    /// operator.
    pub fn eval_comparison(&mut self,
                           left: &Expr,
                           op: BinaryOperator,
                           right: &Expr,
                           line: usize,
                           environment: &Environment)
                           -> EvalResult<f64> {
        let l = self.eval_number(left, environment, left.line_number())?;
        let r = self.eval_number(right, environment, right.line_number())?;
        apply_comparison(op, l, r, line)
    }

    /// Evaluates an additive node. The left operand is evaluated first.
    pub fn eval_term(&mut self,
                     left: &Expr,
                     op: BinaryOperator,
                     right: &Expr,
                     line: usize,
                     environment: &Environment)
                     -> EvalResult<f64> {
        let l = self.eval_number(left, environment, left.line_number())?;
        let r = self.eval_number(right, environment, right.line_number())?;
        apply_term(op, l, r, line)
    }

    /// Evaluates a multiplicative node. The left operand is evaluated first.
    pub fn eval_factor(&mut self,
                       left: &Expr,
                       op: BinaryOperator,
                       right: &Expr,
                       line: usize,
                       environment: &Environment)
                       -> EvalResult<f64> {
        let l = self.eval_number(left, environment, left.line_number())?;
        let r = self.eval_number(right, environment, right.line_number())?;
        apply_factor(op, l, r, line)
    }
}

/// Applies a relational operator, producing `1.0` for true and `0.0` for
/// false.
///
/// # Errors
/// `InvalidOperator` if `op` is not relational.
///
/// # Example
/// ```
/// use mosho::{ast::BinaryOperator, interpreter::evaluator::binary::apply_comparison};
///
/// assert_eq!(apply_comparison(BinaryOperator::Less, 3.0, 5.0, 1).unwrap(), 1.0);
/// assert_eq!(apply_comparison(BinaryOperator::Equal, 3.0, 5.0, 1).unwrap(), 0.0);
/// assert!(apply_comparison(BinaryOperator::Add, 3.0, 5.0, 1).is_err());
/// ```
pub fn apply_comparison(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
    let result = match op {
        BinaryOperator::Greater => left > right,
        BinaryOperator::GreaterEqual => left >= right,
        BinaryOperator::Less => left < right,
        BinaryOperator::LessEqual => left <= right,
        #[allow(clippy::float_cmp)]
        BinaryOperator::Equal => left == right,
        _ => return Err(invalid_operator(op, line)),
    };
    Ok(truth_value(result))
}

/// Applies `+` or `-`.
///
/// # Errors
/// `InvalidOperator` for any other operator.
pub fn apply_term(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        _ => Err(invalid_operator(op, line)),
    }
}

/// Applies `*` or `/`. Division by zero follows IEEE 754 and yields an
/// infinity or `NaN`.
///
/// # Errors
/// `InvalidOperator` for any other operator.
///
/// # Example
/// ```
/// use mosho::{ast::BinaryOperator, interpreter::evaluator::binary::apply_factor};
///
/// assert_eq!(apply_factor(BinaryOperator::Div, 1.0, 0.0, 1).unwrap(), f64::INFINITY);
/// assert!(apply_factor(BinaryOperator::Div, 0.0, 0.0, 1).unwrap().is_nan());
/// ```
pub fn apply_factor(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
    match op {
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => Ok(left / right),
        _ => Err(invalid_operator(op, line)),
    }
}

fn invalid_operator(op: BinaryOperator, line: usize) -> RuntimeError {
    RuntimeError::InvalidOperator { operator: op.to_string(),
                                    line }
}
