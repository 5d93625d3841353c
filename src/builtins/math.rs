use super::{expect_arity, expect_integer};
use crate::evaluator::RuntimeError;
use crate::value::Value;

enum Pair {
    Int(i64, i64),
    Float(f64, f64),
}

/// Arithmetic built-ins follow the operator rule: both operands must share
/// a numeric kind.
fn same_kind_pair(name: &str, args: &[Value]) -> Result<Pair, RuntimeError> {
    expect_arity(name, args, 2)?;
    match (&args[0], &args[1]) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Pair::Int(*a, *b)),
        (Value::Float(a), Value::Float(b)) => Ok(Pair::Float(*a, *b)),
        (a, b) => Err(RuntimeError::InvalidArgument(format!(
            "{} expects two numbers of the same kind, got {} and {}",
            name,
            a.type_name(),
            b.type_name()
        ))),
    }
}

/// `math.add(a, b)`
pub fn add(args: &[Value]) -> Result<Value, RuntimeError> {
    match same_kind_pair("math.add", args)? {
        Pair::Int(a, b) => Ok(Value::Integer(a + b)),
        Pair::Float(a, b) => Ok(Value::Float(a + b)),
    }
}

/// `math.subtract(a, b)`
pub fn subtract(args: &[Value]) -> Result<Value, RuntimeError> {
    match same_kind_pair("math.subtract", args)? {
        Pair::Int(a, b) => Ok(Value::Integer(a - b)),
        Pair::Float(a, b) => Ok(Value::Float(a - b)),
    }
}

/// `math.multiply(a, b)`
pub fn multiply(args: &[Value]) -> Result<Value, RuntimeError> {
    match same_kind_pair("math.multiply", args)? {
        Pair::Int(a, b) => Ok(Value::Integer(a * b)),
        Pair::Float(a, b) => Ok(Value::Float(a * b)),
    }
}

/// `math.divide(a, b)` - fails on a zero divisor, never yields NaN or
/// infinity
pub fn divide(args: &[Value]) -> Result<Value, RuntimeError> {
    match same_kind_pair("math.divide", args)? {
        Pair::Int(_, 0) => Err(RuntimeError::DivisionByZero),
        Pair::Int(a, b) => a
            .checked_div(b)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::InvalidArgument("math.divide: integer overflow".into())),
        Pair::Float(_, b) if b == 0.0 => Err(RuntimeError::DivisionByZero),
        Pair::Float(a, b) => Ok(Value::Float(a / b)),
    }
}

/// `math.power(base, exponent)` - integer exponent
pub fn power(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("math.power", args, 2)?;
    let exponent = match &args[1] {
        Value::Integer(n) => *n,
        other => {
            return Err(RuntimeError::InvalidArgument(format!(
                "math.power expects an integer exponent, got {}",
                other.type_name()
            )));
        }
    };

    match &args[0] {
        Value::Integer(base) => {
            let exp = u32::try_from(exponent).map_err(|_| {
                RuntimeError::InvalidArgument(
                    "math.power expects a non-negative exponent for an integer base".into(),
                )
            })?;
            base.checked_pow(exp)
                .map(Value::Integer)
                .ok_or_else(|| RuntimeError::InvalidArgument("math.power: integer overflow".into()))
        }
        Value::Float(base) => Ok(Value::Float(base.powf(exponent as f64))),
        other => Err(RuntimeError::InvalidArgument(format!(
            "math.power expects a numeric base, got {}",
            other.type_name()
        ))),
    }
}

/// `math.modulo(a, b)` - integer-only, fails on a zero divisor
pub fn modulo(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("math.modulo", args, 2)?;
    let a = expect_integer("math.modulo", args, 0)?;
    let b = expect_integer("math.modulo", args, 1)?;
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    a.checked_rem(b)
        .map(Value::Integer)
        .ok_or_else(|| RuntimeError::InvalidArgument("math.modulo: integer overflow".into()))
}
