use rust_decimal::{Decimal, prelude::FromPrimitive};

/// A runtime value produced by the quanta evaluator.
///
/// Every evaluation step reduces an expression to one of these variants.
/// Collections carry host-exchanged structured values (`serde_json::Value`)
/// rather than a private object model: structured data stays opaque to the
/// engine and crosses the boundary unchanged.
///
/// # Examples
///
/// ```
/// use quanta_lang::Value;
///
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let string = Value::String("hello".to_string());
///
/// let collection = Value::Collection(vec![
///     serde_json::Value::from(1),
///     serde_json::Value::from(2),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean (true/false)
    Boolean(bool),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of host structured values
    Collection(Vec<serde_json::Value>),
}

impl Value {
    /// Truthiness used by the logical operators and quantifier conditions.
    ///
    /// Booleans are taken as-is, numbers are true when non-zero, strings
    /// when non-empty. Collections are never truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Collection(_) => false,
        }
    }

    /// Human-readable kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Collection(_) => "collection",
        }
    }

    /// Value equality as used by `==` and `!=`.
    ///
    /// Integer/Float pairs compare numerically (exactly, through
    /// [`Decimal`], so large integers do not lose precision on the way
    /// through f64). Every other cross-kind pair is unequal, never an
    /// error.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Collection(a), Value::Collection(b)) => a == b,
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                match (Decimal::from_i64(*a), Decimal::from_f64(*b)) {
                    (Some(ad), Some(bd)) => ad == bd,
                    _ => (*a as f64) == *b,
                }
            }
            _ => false,
        }
    }

    /// Convert a host structured value into an engine value.
    ///
    /// Scalars map onto their engine counterparts and arrays become
    /// collections. A host `null` binds as `false`; a host object has no
    /// engine representation and stays opaque, wrapped as a single-element
    /// collection so registered host functions can still receive it.
    pub fn from_host(v: &serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Boolean(false),
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(arr) => Value::Collection(arr.clone()),
            serde_json::Value::Object(_) => Value::Collection(vec![v.clone()]),
        }
    }

    /// Convert an engine value into a host structured value.
    pub fn to_host(&self) -> serde_json::Value {
        match self {
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::Number((*n).into()),
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Collection(items) => serde_json::Value::Array(items.clone()),
        }
    }
}

#[test]
fn test_loose_eq_widening() {
    assert!(Value::Integer(5).loose_eq(&Value::Float(5.0)));
    assert!(!Value::Integer(5).loose_eq(&Value::String("5".to_string())));
    assert!(!Value::Boolean(true).loose_eq(&Value::Integer(1)));
}

#[test]
fn test_host_round_trip() {
    let v = Value::from_host(&serde_json::json!([1, 2, 3]));
    match &v {
        Value::Collection(items) => assert_eq!(items.len(), 3),
        other => panic!("expected collection, got {:?}", other),
    }
    assert_eq!(v.to_host(), serde_json::json!([1, 2, 3]));
}
