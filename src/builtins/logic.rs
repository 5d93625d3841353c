//! Demonstration built-ins: C++ source inspection, Peano arithmetic and
//! the metalogic encoders used by the self-reference example programs.

use super::{expect_arity, expect_integer, expect_string};
use crate::evaluator::RuntimeError;
use crate::value::Value;

/// `cpp.count_classes(source)` - occurrences of a `class <identifier>`
/// pattern in the given source text
pub fn count_classes(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("cpp.count_classes", args, 1)?;
    let source = expect_string("cpp.count_classes", args, 0)?;

    let re = regex::Regex::new(r"\bclass\s+[A-Za-z_][A-Za-z0-9_]*")
        .map_err(|e| RuntimeError::TypeError(format!("invalid regex: {e}")))?;
    Ok(Value::Integer(re.find_iter(source).count() as i64))
}

/// `peano.successor(n)` = n + 1
pub fn successor(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("peano.successor", args, 1)?;
    let n = expect_integer("peano.successor", args, 0)?;
    Ok(Value::Integer(n + 1))
}

/// `peano.is_zero(n)`
pub fn is_zero(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("peano.is_zero", args, 1)?;
    let n = expect_integer("peano.is_zero", args, 0)?;
    Ok(Value::Boolean(n == 0))
}

/// `peano.predecessor(n)` = n > 0 ? n - 1 : 0 (never negative)
pub fn predecessor(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("peano.predecessor", args, 1)?;
    let n = expect_integer("peano.predecessor", args, 0)?;
    Ok(Value::Integer(if n > 0 { n - 1 } else { 0 }))
}

/// `metalogic.encode_formula(s)` - sum of the character codes of a formula
/// string, a toy Gödel numbering
pub fn encode_formula(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("metalogic.encode_formula", args, 1)?;
    let s = expect_string("metalogic.encode_formula", args, 0)?;
    Ok(Value::Integer(s.chars().map(|c| c as i64).sum()))
}

/// `metalogic.self_reference(s)` = encode_formula(s) * 17 + 42
pub fn self_reference(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("metalogic.self_reference", args, 1)?;
    let s = expect_string("metalogic.self_reference", args, 0)?;
    let encoded: i64 = s.chars().map(|c| c as i64).sum();
    Ok(Value::Integer(encoded * 17 + 42))
}
