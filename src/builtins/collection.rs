use super::{expect_arity, expect_collection};
use crate::evaluator::RuntimeError;
use crate::value::Value;

/// `collection.count(c)` - number of elements
pub fn count(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("collection.count", args, 1)?;
    let items = expect_collection("collection.count", args, 0)?;
    Ok(Value::Integer(items.len() as i64))
}

/// `collection.contains(c, v)` - linear scan using the language's equality
/// rule, so `collection.contains([1, 2], 2.0)` is true
pub fn contains(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("collection.contains", args, 2)?;
    let items = expect_collection("collection.contains", args, 0)?;
    let needle = &args[1];

    let found = items
        .iter()
        .any(|element| Value::from_host(element).loose_eq(needle));
    Ok(Value::Boolean(found))
}
