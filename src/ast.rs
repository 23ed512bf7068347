use std::rc::Rc;

/// The root of a parsed unit of source text.
///
/// A program is an ordered list of top-level statements and expressions. It
/// is evaluated front to back against one environment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level constructs in source order.
    pub body: Vec<Statement>,
}

/// Represents a literal appearing in an expression.
///
/// A literal is either a numeric constant or a reference to a name. Function
/// calls are a separate node.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A numeric constant. Every number is a 64-bit float.
    Number(f64),
    /// A reference to a variable or function by name.
    Variable(String),
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Literal {
    fn from(name: &str) -> Self {
        Self::Variable(name.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The three binary variants encode the precedence levels of the grammar:
/// `Comparison` binds loosest, then `Term`, then `Factor`. Operands of every
/// level fold leftward, so `1 - 2 - 3` is `Term(Term(1, -, 2), -, 3)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A relational operation (`>`, `>=`, `<`, `<=`, `==`).
    Comparison {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An additive operation (`+`, `-`).
    Term {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A multiplicative operation (`*`, `/`).
    Factor {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The wrapped expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A number or a variable reference.
    Literal {
        /// The literal itself.
        value: Literal,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `fact(4)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use mosho::ast::Expr;
    ///
    /// let expr = Expr::Literal { value: "x".into(),
    ///                            line:  5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Comparison { line, .. }
            | Self::Term { line, .. }
            | Self::Factor { line, .. }
            | Self::Grouping { line, .. }
            | Self::Literal { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// Definitions are shared between the syntax tree and every environment the
/// function is bound in, so a call never copies the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements evaluated when the function is called. The outcome of
    /// the last one is the return value.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement or a bare expression.
///
/// Programs, bodies of `if` and `while`, and function bodies are all ordered
/// lists of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional block.
    If {
        /// The condition; any nonzero number is true.
        condition: Expr,
        /// Statements evaluated when the condition holds.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A loop that runs its body while the condition holds.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// Statements evaluated on each iteration.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A user-defined function declaration.
    FunctionDefinition(Rc<FunctionDef>),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
///
/// Which node carries an operator decides its precedence; the evaluator
/// rejects an operator found in a node of the wrong level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
        };
        write!(f, "{operator}")
    }
}
