use crate::ast::{BinOp, Expr, Program, QuantifierKind, UnaryOp};
use crate::context::Context;
use crate::value::Value;

/// Default maximum expression nesting depth per evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone)]
pub enum RuntimeError {
    /// Type mismatch or invalid operation for the given kinds
    TypeError(String),

    /// Reference to an unbound variable
    UndefinedVariable(String),

    /// Call to an unregistered function
    UndefinedFunction(String),

    /// Division or modulo by zero
    DivisionByZero,

    /// A built-in's argument count or kind precondition was violated
    InvalidArgument(String),

    /// Expression nesting exceeded the evaluator's depth budget
    DepthExceeded(usize),

    /// A filesystem built-in failed
    Io(String),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::TypeError(msg) => write!(f, "Type error: {}", msg),
            RuntimeError::UndefinedVariable(name) => write!(f, "Variable not found: {}", name),
            RuntimeError::UndefinedFunction(name) => write!(f, "Function not found: {}", name),
            RuntimeError::DivisionByZero => write!(f, "Division by zero"),
            RuntimeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            RuntimeError::DepthExceeded(limit) => {
                write!(f, "Evaluation depth limit exceeded ({})", limit)
            }
            RuntimeError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// The tree-walking evaluator.
///
/// One evaluation rule per AST node kind, no separate compilation pass.
/// Recursion depth tracks expression nesting and is bounded: exceeding the
/// budget raises [`RuntimeError::DepthExceeded`] instead of exhausting the
/// call stack on hostile input.
pub struct Evaluator {
    max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Evaluator { max_depth }
    }

    /// Evaluate a program statement by statement.
    ///
    /// The overall result is the last statement's value; an empty program
    /// yields `true`.
    pub fn eval_program(
        &self,
        program: &Program,
        ctx: &mut Context,
    ) -> Result<Value, RuntimeError> {
        let mut result = Value::Boolean(true);
        for statement in &program.statements {
            result = self.eval(statement, ctx)?;
        }
        Ok(result)
    }

    /// Evaluate a single expression.
    pub fn eval(&self, expr: &Expr, ctx: &mut Context) -> Result<Value, RuntimeError> {
        self.eval_expr(expr, ctx, 0)
    }

    fn eval_expr(
        &self,
        expr: &Expr,
        ctx: &mut Context,
        depth: usize,
    ) -> Result<Value, RuntimeError> {
        if depth > self.max_depth {
            return Err(RuntimeError::DepthExceeded(self.max_depth));
        }

        match expr {
            Expr::Integer(n) => Ok(Value::Integer(*n)),
            Expr::Float(n) => Ok(Value::Float(*n)),
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::Str(s) => Ok(Value::String(s.clone())),
            Expr::Variable(name) => ctx
                .get_var(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UndefinedVariable(name.clone())),
            Expr::Collection(items) => {
                let mut elements = Vec::with_capacity(items.len());
                for item in items {
                    elements.push(self.eval_expr(item, ctx, depth + 1)?.to_host());
                }
                Ok(Value::Collection(elements))
            }
            Expr::Unary { op, operand } => {
                let value = self.eval_expr(operand, ctx, depth + 1)?;
                self.apply_unary(*op, &value)
            }
            Expr::Binary { op, left, right } => {
                // Both operands evaluate eagerly, logical operators included
                let left_val = self.eval_expr(left, ctx, depth + 1)?;
                let right_val = self.eval_expr(right, ctx, depth + 1)?;
                self.apply_binop(*op, &left_val, &right_val)
            }
            Expr::Call { name, args } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(arg, ctx, depth + 1)?);
                }
                ctx.call(name, &values)
            }
            Expr::Quantifier {
                kind,
                var,
                domain,
                condition,
            } => {
                let domain_val = self.eval_expr(domain, ctx, depth + 1)?;
                let elements = match domain_val {
                    Value::Collection(items) => items,
                    other => {
                        return Err(RuntimeError::TypeError(format!(
                            "quantifier domain must be a collection, got {}",
                            other.type_name()
                        )));
                    }
                };

                ctx.push_scope();
                let result = self.eval_quantifier(*kind, var, &elements, condition, ctx, depth);
                // The scope is restored on every exit path, errors included
                ctx.pop_scope();
                result
            }
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                let cond = self.eval_expr(condition, ctx, depth + 1)?;
                let taken = match cond {
                    Value::Boolean(b) => b,
                    other => {
                        return Err(RuntimeError::TypeError(format!(
                            "conditional condition must be a boolean, got {}",
                            other.type_name()
                        )));
                    }
                };
                // Exactly one branch is evaluated
                if taken {
                    self.eval_expr(then_branch, ctx, depth + 1)
                } else {
                    self.eval_expr(else_branch, ctx, depth + 1)
                }
            }
        }
    }

    fn eval_quantifier(
        &self,
        kind: QuantifierKind,
        var: &str,
        elements: &[serde_json::Value],
        condition: &Expr,
        ctx: &mut Context,
        depth: usize,
    ) -> Result<Value, RuntimeError> {
        match kind {
            QuantifierKind::Forall => {
                for element in elements {
                    ctx.set_var(var, Value::from_host(element));
                    let matched = self.eval_expr(condition, ctx, depth + 1)?.is_truthy();
                    if !matched {
                        // Stop on the first failing element
                        return Ok(Value::Boolean(false));
                    }
                }
                // Vacuously true on an empty domain
                Ok(Value::Boolean(true))
            }
            QuantifierKind::Exists => {
                for element in elements {
                    ctx.set_var(var, Value::from_host(element));
                    let matched = self.eval_expr(condition, ctx, depth + 1)?.is_truthy();
                    if matched {
                        return Ok(Value::Boolean(true));
                    }
                }
                Ok(Value::Boolean(false))
            }
        }
    }

    fn apply_unary(&self, op: UnaryOp, value: &Value) -> Result<Value, RuntimeError> {
        match op {
            UnaryOp::Not => Ok(Value::Boolean(!value.is_truthy())),
            UnaryOp::Negate => match value {
                Value::Integer(n) => Ok(Value::Integer(-n)),
                Value::Float(n) => Ok(Value::Float(-n)),
                other => Err(RuntimeError::TypeError(format!(
                    "Cannot negate {}",
                    other.type_name()
                ))),
            },
            UnaryOp::Plus => match value {
                Value::Integer(_) | Value::Float(_) => Ok(value.clone()),
                other => Err(RuntimeError::TypeError(format!(
                    "Unary '+' requires a number, got {}",
                    other.type_name()
                ))),
            },
        }
    }

    fn apply_binop(&self, op: BinOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
        match op {
            BinOp::Add => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a + b)),
                (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot add {} and {} (operands must share a numeric kind)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::Subtract => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a - b)),
                (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot subtract {} from {} (operands must share a numeric kind)",
                    b.type_name(),
                    a.type_name()
                ))),
            },
            BinOp::Multiply => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a * b)),
                (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot multiply {} by {} (operands must share a numeric kind)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::Divide => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        a.checked_div(*b)
                            .map(Value::Integer)
                            .ok_or_else(|| RuntimeError::TypeError("Integer overflow in '/'".into()))
                    }
                }
                (Value::Float(a), Value::Float(b)) => {
                    if *b == 0.0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        Ok(Value::Float(a / b))
                    }
                }
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot divide {} by {} (operands must share a numeric kind)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::Modulo => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        a.checked_rem(*b)
                            .map(Value::Integer)
                            .ok_or_else(|| RuntimeError::TypeError("Integer overflow in '%'".into()))
                    }
                }
                (Value::Float(a), Value::Float(b)) => {
                    if *b == 0.0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        Ok(Value::Float(a % b))
                    }
                }
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot compute modulo of {} by {} (operands must share a numeric kind)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::Power => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => {
                    let exp = u32::try_from(*b).map_err(|_| {
                        RuntimeError::TypeError(
                            "Integer exponent must be non-negative and in range".into(),
                        )
                    })?;
                    a.checked_pow(exp)
                        .map(Value::Integer)
                        .ok_or_else(|| RuntimeError::TypeError("Integer overflow in '**'".into()))
                }
                (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a.powf(*b))),
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot raise {} to {} (operands must share a numeric kind)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::Equal => Ok(Value::Boolean(left.loose_eq(right))),
            BinOp::NotEqual => Ok(Value::Boolean(!left.loose_eq(right))),
            BinOp::LessThan => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a < b)),
                (Value::Float(a), Value::Float(b)) => Ok(Value::Boolean(a < b)),
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot compare {} < {} (comparison requires matching numeric kinds)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::GreaterThan => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a > b)),
                (Value::Float(a), Value::Float(b)) => Ok(Value::Boolean(a > b)),
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot compare {} > {} (comparison requires matching numeric kinds)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::LessEqual => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a <= b)),
                (Value::Float(a), Value::Float(b)) => Ok(Value::Boolean(a <= b)),
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot compare {} <= {} (comparison requires matching numeric kinds)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::GreaterEqual => match (left, right) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a >= b)),
                (Value::Float(a), Value::Float(b)) => Ok(Value::Boolean(a >= b)),
                (a, b) => Err(RuntimeError::TypeError(format!(
                    "Cannot compare {} >= {} (comparison requires matching numeric kinds)",
                    a.type_name(),
                    b.type_name()
                ))),
            },
            BinOp::And => Ok(Value::Boolean(left.is_truthy() && right.is_truthy())),
            BinOp::Or => Ok(Value::Boolean(left.is_truthy() || right.is_truthy())),
            BinOp::Implies => Ok(Value::Boolean(!left.is_truthy() || right.is_truthy())),
            BinOp::Iff => Ok(Value::Boolean(left.is_truthy() == right.is_truthy())),
        }
    }
}
