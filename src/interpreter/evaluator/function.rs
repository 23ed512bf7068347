use std::{io::Write, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{
            core::{Outcome, Value},
            environment::Environment,
        },
    },
};

/// Name of the only built-in function. It cannot be shadowed.
pub const PRINT: &str = "print";

impl<W: Write> Evaluator<W> {
    /// Evaluates a function call.
    ///
    /// `print` is handled directly. Any other name must be bound to a
    /// function in `environment`. Arguments are evaluated left to right in
    /// the caller's environment before the arity check. The body then runs in
    /// a call environment holding the caller's functions and the parameters.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number for error reporting.
    /// - `environment`: The caller's environment.
    ///
    /// # Returns
    /// The outcome of the last statement of the body, or `Unit` for an empty
    /// body.
    ///
    /// # Errors
    /// - `UndefinedName` if nothing is bound to `name`.
    /// - `NotCallable` if `name` is bound to a number.
    /// - `ArityMismatch` if the argument count differs from the parameters.
    /// - `RecursionLimit` if calls nest deeper than the configured limit.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize,
                                     environment: &Environment)
                                     -> EvalResult<Outcome> {
        if name == PRINT {
            return self.eval_print(arguments, line, environment);
        }

        let func = match environment.get(name) {
            Some(Value::Function(def)) => Rc::clone(def),
            Some(Value::Number(_)) => {
                return Err(RuntimeError::NotCallable { name: name.to_string(),
                                                       line });
            },
            None => {
                return Err(RuntimeError::UndefinedName { name: name.to_string(),
                                                         line });
            },
        };

        let mut arg_vals = Vec::with_capacity(arguments.len());
        for argument in arguments {
            arg_vals.push(self.eval_value(argument, environment, line)?);
        }

        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: func.params.len(),
                                                     found: arg_vals.len(),
                                                     line });
        }

        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.max_call_depth,
                                                      line });
        }

        let mut frame = environment.call_frame();
        for (param, value) in func.params.iter().zip(arg_vals) {
            frame.set(param, value);
        }

        self.call_depth += 1;
        let result = self.eval_function_body(&func.body, &mut frame);
        self.call_depth -= 1;

        result
    }

    /// Runs a function body, keeping only the last outcome.
    fn eval_function_body(&mut self,
                          body: &[Statement],
                          frame: &mut Environment)
                          -> EvalResult<Outcome> {
        let mut last = Outcome::Unit;

        for statement in body {
            last = self.eval_statement(statement, frame)?;
        }

        Ok(last)
    }

    /// Prints each argument on its own line, in order.
    ///
    /// Each argument is written as soon as it is evaluated, so output from
    /// earlier arguments survives a failure in a later one.
    fn eval_print(&mut self,
                  arguments: &[Expr],
                  line: usize,
                  environment: &Environment)
                  -> EvalResult<Outcome> {
        for argument in arguments {
            let value = self.eval_value(argument, environment, line)?;
            writeln!(self.output, "{value}").map_err(|source| RuntimeError::Output { source,
                                                                                    line })?;
        }

        Ok(Outcome::Unit)
    }
}
