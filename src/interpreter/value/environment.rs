use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A mutable mapping from names to values.
///
/// One environment is the global scope of a REPL session or a file run. Each
/// function call gets its own environment from [`Environment::call_frame`],
/// which is dropped when the call returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a name up.
    ///
    /// # Example
    /// ```
    /// use mosho::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Number(5.0));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Number(5.0)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Builds the starting environment for a function call.
    ///
    /// Only function bindings are carried over; numbers stay behind, since
    /// the language has no closures. Functions are shared, not copied, so a
    /// body can call itself or any function its caller could see.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use mosho::{
    ///     ast::FunctionDef,
    ///     interpreter::value::{core::Value, environment::Environment},
    /// };
    ///
    /// let def = Rc::new(FunctionDef { name:   "f".into(),
    ///                                 params: vec![],
    ///                                 body:   vec![],
    ///                                 line:   1, });
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Number(1.0));
    /// env.set("f", Value::Function(def));
    ///
    /// let frame = env.call_frame();
    /// assert!(frame.contains("f"));
    /// assert!(!frame.contains("x"));
    /// ```
    #[must_use]
    pub fn call_frame(&self) -> Self {
        let bindings = self.bindings
                           .iter()
                           .filter(|(_, value)| value.is_function())
                           .map(|(name, value)| (name.clone(), value.clone()))
                           .collect();
        Self { bindings }
    }
}
