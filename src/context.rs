use std::collections::HashMap;
use std::rc::Rc;

use crate::evaluator::RuntimeError;
use crate::value::Value;

/// Signature of a native function callable from a program.
///
/// Built-ins and host-registered extensions share this shape; each
/// function validates its own argument count and kinds.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Result<Value, RuntimeError>>;

/// Execution context visible during one evaluation.
///
/// Variables live in a stack of scopes searched innermost-first; the base
/// scope is never popped. Functions live in a flat registry with no
/// scoping. A fresh context is built for every top-level execution —
/// the internals are not meant for concurrent mutation.
pub struct Context {
    scopes: Vec<HashMap<String, Value>>,
    functions: HashMap<String, NativeFn>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Self {
        Context {
            scopes: vec![HashMap::new()],
            functions: HashMap::new(),
        }
    }

    /// Build a context around an existing function registry.
    pub fn with_functions(functions: HashMap<String, NativeFn>) -> Self {
        Context {
            scopes: vec![HashMap::new()],
            functions,
        }
    }

    /// Bind a variable in the innermost scope.
    pub fn set_var(&mut self, name: impl Into<String>, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.into(), value);
        }
    }

    /// Resolve a variable, innermost scope first.
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.get_var(name).is_some()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Popping past the base scope is a no-op, never an error.
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Register (or replace) a native function.
    pub fn register(&mut self, name: impl Into<String>, function: NativeFn) {
        self.functions.insert(name.into(), function);
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Invoke a registered function with already-evaluated arguments.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedFunction(name.to_string()))?;
        function(args)
    }
}

#[test]
fn test_scope_shadowing() {
    let mut ctx = Context::new();
    ctx.set_var("x", Value::Integer(1));
    ctx.push_scope();
    ctx.set_var("x", Value::Integer(2));
    assert_eq!(ctx.get_var("x"), Some(&Value::Integer(2)));
    ctx.pop_scope();
    assert_eq!(ctx.get_var("x"), Some(&Value::Integer(1)));
}

#[test]
fn test_pop_below_base_is_noop() {
    let mut ctx = Context::new();
    ctx.set_var("x", Value::Integer(1));
    ctx.pop_scope();
    ctx.pop_scope();
    assert_eq!(ctx.get_var("x"), Some(&Value::Integer(1)));
}
