use super::{expect_arity, expect_string};
use crate::evaluator::RuntimeError;
use crate::value::Value;

/// `string.length(s)` - number of characters
pub fn length(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("string.length", args, 1)?;
    let s = expect_string("string.length", args, 0)?;
    Ok(Value::Integer(s.chars().count() as i64))
}

/// `string.concat(a, b, ...)` - concatenation of two or more strings
pub fn concat(args: &[Value]) -> Result<Value, RuntimeError> {
    if args.len() < 2 {
        return Err(RuntimeError::InvalidArgument(format!(
            "string.concat expects at least 2 arguments, got {}",
            args.len()
        )));
    }

    let mut result = String::new();
    for index in 0..args.len() {
        result.push_str(expect_string("string.concat", args, index)?);
    }
    Ok(Value::String(result))
}

/// `string.contains(s, sub)` - substring test
pub fn contains(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("string.contains", args, 2)?;
    let s = expect_string("string.contains", args, 0)?;
    let sub = expect_string("string.contains", args, 1)?;
    Ok(Value::Boolean(s.contains(sub)))
}

/// `string.starts_with(s, prefix)` - prefix test
pub fn starts_with(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("string.starts_with", args, 2)?;
    let s = expect_string("string.starts_with", args, 0)?;
    let prefix = expect_string("string.starts_with", args, 1)?;
    Ok(Value::Boolean(s.starts_with(prefix)))
}
