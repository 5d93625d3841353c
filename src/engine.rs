//! Top-level execution surface.
//!
//! An [`Engine`] owns the function registry template, host-defined
//! globals, and the evaluation depth budget. Every call to
//! [`Engine::execute`] builds one fresh [`Context`], so concurrent
//! evaluation means one engine call per task, never a shared context.

use std::collections::HashMap;
use std::rc::Rc;

use crate::builtins;
use crate::context::{Context, NativeFn};
use crate::evaluator::{DEFAULT_MAX_DEPTH, Evaluator, RuntimeError};
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};
use crate::value::Value;

/// Any error raised while executing a program.
///
/// The three kinds are disjoint and terminal to the call that raised
/// them; callers catch them uniformly at the execute boundary.
#[derive(Debug)]
pub enum Error {
    /// Malformed token
    Lex(LexError),
    /// Grammar violation
    Parse(ParseError),
    /// Evaluation failure
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "{}", e),
            Error::Parse(e) => write!(f, "{}", e),
            Error::Runtime(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Error::Runtime(e)
    }
}

/// A syntax problem reported by [`Engine::validate`].
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}: {}", self.line, self.column, self.message)
    }
}

/// The program execution engine.
///
/// # Examples
///
/// ```
/// use quanta_lang::{Engine, Value};
///
/// let engine = Engine::new();
/// let result = engine.execute("forall $x in [1, 2, 3]: $x > 0").unwrap();
/// assert_eq!(result, Value::Boolean(true));
/// ```
pub struct Engine {
    functions: HashMap<String, NativeFn>,
    globals: HashMap<String, Value>,
    max_depth: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine with the default built-in catalogue installed.
    pub fn new() -> Self {
        Engine {
            functions: builtins::default_registry(),
            globals: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the evaluation depth budget.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Register (or replace) a native function ahead of execution.
    ///
    /// # Examples
    ///
    /// ```
    /// use quanta_lang::{Engine, Value};
    ///
    /// let mut engine = Engine::new();
    /// engine.register("answer", |_args: &[Value]| Ok(Value::Integer(42)));
    /// assert_eq!(engine.execute("answer()").unwrap(), Value::Integer(42));
    /// ```
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&[Value]) -> Result<Value, RuntimeError> + 'static,
    {
        self.functions.insert(name.into(), Rc::new(function));
    }

    /// Seed a host-supplied variable into the base scope of every
    /// execution.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    /// Lex, parse and evaluate a program in one call, in a fresh context.
    pub fn execute(&self, source: &str) -> Result<Value, Error> {
        let tokens = Lexer::tokenize(source)?;
        let mut parser = Parser::new(tokens);
        let program = parser.parse_program()?;

        let mut ctx = Context::with_functions(self.functions.clone());
        for (name, value) in &self.globals {
            ctx.set_var(name.clone(), value.clone());
        }

        let evaluator = Evaluator::with_max_depth(self.max_depth);
        Ok(evaluator.eval_program(&program, &mut ctx)?)
    }

    /// Syntax check without evaluation. An empty list means the program
    /// parses.
    pub fn validate(&self, source: &str) -> Vec<Diagnostic> {
        let tokens = match Lexer::tokenize(source) {
            Ok(tokens) => tokens,
            Err(e) => {
                return vec![Diagnostic {
                    message: e.message,
                    line: e.line,
                    column: e.column,
                }];
            }
        };

        let mut parser = Parser::new(tokens);
        match parser.parse_program() {
            Ok(_) => Vec::new(),
            Err(e) => vec![Diagnostic {
                message: e.message,
                line: e.line,
                column: e.column,
            }],
        }
    }

    /// True when the program parses and evaluates without raising.
    pub fn is_valid(&self, source: &str) -> bool {
        self.execute(source).is_ok()
    }
}

/// Execute a program with the default built-in catalogue.
pub fn execute(source: &str) -> Result<Value, Error> {
    Engine::new().execute(source)
}

/// Syntax-check a program with a default engine.
pub fn validate(source: &str) -> Vec<Diagnostic> {
    Engine::new().validate(source)
}

/// True when the program parses and evaluates without error.
pub fn is_valid(source: &str) -> bool {
    Engine::new().is_valid(source)
}
