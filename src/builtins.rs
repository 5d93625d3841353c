//! Built-in function catalogue.
//!
//! A fixed set of native functions pre-registered into every fresh
//! [`Context`](crate::context::Context) before execution. Hosts extend or
//! replace entries through [`Engine::register`](crate::engine::Engine::register).
//! Every built-in validates its own argument count and kinds and fails
//! with a message naming itself and the violated precondition.

mod strings;
mod math;
mod collection;
mod filesystem;
mod logic;

use std::collections::HashMap;
use std::rc::Rc;

use crate::context::{Context, NativeFn};
use crate::evaluator::RuntimeError;
use crate::value::Value;

/// Build the default function registry.
pub fn default_registry() -> HashMap<String, NativeFn> {
    let entries: &[(&str, fn(&[Value]) -> Result<Value, RuntimeError>)] = &[
        // String predicates
        ("string.length", strings::length),
        ("string.concat", strings::concat),
        ("string.contains", strings::contains),
        ("string.starts_with", strings::starts_with),
        // Arithmetic
        ("math.add", math::add),
        ("math.subtract", math::subtract),
        ("math.multiply", math::multiply),
        ("math.divide", math::divide),
        ("math.power", math::power),
        ("math.modulo", math::modulo),
        // Collections
        ("collection.count", collection::count),
        ("collection.contains", collection::contains),
        // Filesystem wrappers
        ("filesystem.exists", filesystem::exists),
        ("filesystem.is_file", filesystem::is_file),
        ("filesystem.is_directory", filesystem::is_directory),
        ("filesystem.get_files", filesystem::get_files),
        ("filesystem.get_cpp_files", filesystem::get_cpp_files),
        ("filesystem.read_file", filesystem::read_file),
        // C++ source inspection
        ("cpp.count_classes", logic::count_classes),
        // Peano arithmetic
        ("peano.successor", logic::successor),
        ("peano.is_zero", logic::is_zero),
        ("peano.predecessor", logic::predecessor),
        // Metalogic encoders
        ("metalogic.encode_formula", logic::encode_formula),
        ("metalogic.self_reference", logic::self_reference),
    ];

    let mut functions = HashMap::new();
    for (name, function) in entries {
        functions.insert((*name).to_string(), Rc::new(*function) as NativeFn);
    }
    functions
}

/// Register the whole catalogue into an existing context.
pub fn install(ctx: &mut Context) {
    for (name, function) in default_registry() {
        ctx.register(name, function);
    }
}

fn expect_arity(name: &str, args: &[Value], count: usize) -> Result<(), RuntimeError> {
    if args.len() != count {
        return Err(RuntimeError::InvalidArgument(format!(
            "{} expects {} argument(s), got {}",
            name,
            count,
            args.len()
        )));
    }
    Ok(())
}

fn expect_string<'a>(name: &str, args: &'a [Value], index: usize) -> Result<&'a str, RuntimeError> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(RuntimeError::InvalidArgument(format!(
            "{} expects a string for argument {}, got {}",
            name,
            index + 1,
            other.type_name()
        ))),
        None => Err(RuntimeError::InvalidArgument(format!(
            "{} is missing argument {}",
            name,
            index + 1
        ))),
    }
}

fn expect_integer(name: &str, args: &[Value], index: usize) -> Result<i64, RuntimeError> {
    match args.get(index) {
        Some(Value::Integer(n)) => Ok(*n),
        Some(other) => Err(RuntimeError::InvalidArgument(format!(
            "{} expects an integer for argument {}, got {}",
            name,
            index + 1,
            other.type_name()
        ))),
        None => Err(RuntimeError::InvalidArgument(format!(
            "{} is missing argument {}",
            name,
            index + 1
        ))),
    }
}

fn expect_collection<'a>(
    name: &str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a [serde_json::Value], RuntimeError> {
    match args.get(index) {
        Some(Value::Collection(items)) => Ok(items),
        Some(other) => Err(RuntimeError::InvalidArgument(format!(
            "{} expects a collection for argument {}, got {}",
            name,
            index + 1,
            other.type_name()
        ))),
        None => Err(RuntimeError::InvalidArgument(format!(
            "{} is missing argument {}",
            name,
            index + 1
        ))),
    }
}
