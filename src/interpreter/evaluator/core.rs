use std::{
    io::{self, Write},
    rc::Rc,
};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::value::{
        core::{Outcome, Value},
        environment::Environment,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Walks syntax trees and produces outcomes.
///
/// The evaluator owns no bindings; every call takes the environment to read
/// and mutate. It owns the sink that `print` writes to and tracks how deeply
/// calls are nested.
///
/// ## Usage
///
/// One `Evaluator` can be reused across many programs and environments, for
/// example one per REPL session.
pub struct Evaluator<W: Write> {
    pub(super) output:         W,
    pub(super) call_depth:     usize,
    pub(super) max_call_depth: usize,
}

impl Evaluator<io::Stdout> {
    /// Creates an evaluator printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Evaluator<W> {
    /// Creates an evaluator writing `print` output to `output`.
    pub const fn new(output: W) -> Self {
        Self { output,
               call_depth: 0,
               max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }

    /// Sets the maximum nesting of function calls.
    #[must_use]
    pub fn with_max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Borrows the output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the evaluator and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates every top-level construct of a program in order.
    ///
    /// # Parameters
    /// - `program`: The parsed program.
    /// - `environment`: The global environment. Bindings made here persist
    ///   after the call, including those made before an error.
    ///
    /// # Returns
    /// One outcome per top-level construct.
    ///
    /// # Example
    /// ```
    /// use mosho::{
    ///     interpreter::{
    ///         evaluator::core::Evaluator,
    ///         lexer::tokenize,
    ///         parser::core::parse,
    ///         value::{core::Outcome, environment::Environment},
    ///     },
    /// };
    ///
    /// let program = parse(&tokenize("x = 2\nx * 3").unwrap()).unwrap();
    /// let mut env = Environment::new();
    /// let mut evaluator = Evaluator::new(Vec::new());
    ///
    /// let outcomes = evaluator.eval_program(&program, &mut env).unwrap();
    /// assert_eq!(outcomes, vec![Outcome::Unit, 6.0.into()]);
    /// ```
    pub fn eval_program(&mut self,
                        program: &Program,
                        environment: &mut Environment)
                        -> EvalResult<Vec<Outcome>> {
        self.eval_body(&program.body, environment)
    }

    /// Evaluates a statement sequence, collecting each outcome.
    pub fn eval_body(&mut self,
                     body: &[Statement],
                     environment: &mut Environment)
                     -> EvalResult<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(body.len());

        for statement in body {
            outcomes.push(self.eval_statement(statement, environment)?);
        }

        Ok(outcomes)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments and function definitions bind into `environment`. A taken
    /// `if` yields the outcomes of its body; loops, assignments, definitions
    /// and untaken `if`s yield `Unit`.
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          environment: &mut Environment)
                          -> EvalResult<Outcome> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let value = self.eval_value(value, environment, *line)?;
                environment.set(name, value);
                Ok(Outcome::Unit)
            },
            Statement::If { condition,
                            body,
                            line, } => {
                if self.eval_condition(condition, environment, *line)? {
                    Ok(Outcome::Sequence(self.eval_body(body, environment)?))
                } else {
                    Ok(Outcome::Unit)
                }
            },
            Statement::While { condition,
                               body,
                               line, } => {
                while self.eval_condition(condition, environment, *line)? {
                    self.eval_body(body, environment)?;
                }
                Ok(Outcome::Unit)
            },
            Statement::FunctionDefinition(def) => {
                environment.set(&def.name, Value::Function(Rc::clone(def)));
                Ok(Outcome::Unit)
            },
            Statement::Expression { expr, .. } => self.eval(expr, environment),
        }
    }

    /// Evaluates an expression.
    ///
    /// Expressions never bind names, so the environment is only read. Calls
    /// run in environments of their own.
    pub fn eval(&mut self, expr: &Expr, environment: &Environment) -> EvalResult<Outcome> {
        match expr {
            Expr::Comparison { left,
                               op,
                               right,
                               line, } => {
                self.eval_comparison(left, *op, right, *line, environment)
                    .map(Outcome::from)
            },
            Expr::Term { left,
                         op,
                         right,
                         line, } => self.eval_term(left, *op, right, *line, environment)
                                        .map(Outcome::from),
            Expr::Factor { left,
                           op,
                           right,
                           line, } => self.eval_factor(left, *op, right, *line, environment)
                                          .map(Outcome::from),
            Expr::Grouping { expr, .. } => self.eval(expr, environment),
            Expr::Literal { value, line } => {
                Self::eval_literal(value, *line, environment).map(Outcome::Value)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => {
                self.eval_function_call(name, arguments, *line, environment)
            },
        }
    }
}

/// Evaluates a program against `environment`, printing to standard output.
///
/// # Errors
/// Returns the first `RuntimeError` raised. Bindings and output committed
/// before the error remain.
///
/// # Example
/// ```
/// use mosho::{evaluate, parse, tokenize, interpreter::value::{core::Outcome, environment::Environment}};
///
/// let program = parse(&tokenize("1 + 2 * 3").unwrap()).unwrap();
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate(&program, &mut env).unwrap(), vec![Outcome::from(7.0)]);
/// ```
pub fn evaluate(program: &Program, environment: &mut Environment) -> EvalResult<Vec<Outcome>> {
    Evaluator::stdout().eval_program(program, environment)
}
