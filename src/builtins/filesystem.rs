//! Thin synchronous wrappers over the host filesystem. I/O failures
//! propagate as runtime errors; there are no retries.

use std::fs;
use std::path::Path;

use super::{expect_arity, expect_string};
use crate::evaluator::RuntimeError;
use crate::value::Value;

/// Extensions treated as C++ sources by `filesystem.get_cpp_files`.
const CPP_EXTENSIONS: &[&str] = &["cpp", "cxx", "cc", "hpp", "hxx", "hh", "h"];

fn io_error(name: &str, path: &str, err: std::io::Error) -> RuntimeError {
    RuntimeError::Io(format!("{} failed for '{}': {}", name, path, err))
}

/// `filesystem.exists(path)`
pub fn exists(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("filesystem.exists", args, 1)?;
    let path = expect_string("filesystem.exists", args, 0)?;
    Ok(Value::Boolean(Path::new(path).exists()))
}

/// `filesystem.is_file(path)`
pub fn is_file(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("filesystem.is_file", args, 1)?;
    let path = expect_string("filesystem.is_file", args, 0)?;
    Ok(Value::Boolean(Path::new(path).is_file()))
}

/// `filesystem.is_directory(path)`
pub fn is_directory(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("filesystem.is_directory", args, 1)?;
    let path = expect_string("filesystem.is_directory", args, 0)?;
    Ok(Value::Boolean(Path::new(path).is_dir()))
}

/// `filesystem.get_files(dir)` - regular files directly under `dir`,
/// sorted for deterministic iteration order
pub fn get_files(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("filesystem.get_files", args, 1)?;
    let dir = expect_string("filesystem.get_files", args, 0)?;

    let entries = fs::read_dir(dir).map_err(|e| io_error("filesystem.get_files", dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_error("filesystem.get_files", dir, e))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path.to_string_lossy().into_owned());
        }
    }
    paths.sort();

    Ok(Value::Collection(
        paths.into_iter().map(serde_json::Value::String).collect(),
    ))
}

/// `filesystem.get_cpp_files(dir)` - recursive scan for C++ sources,
/// sorted
pub fn get_cpp_files(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("filesystem.get_cpp_files", args, 1)?;
    let dir = expect_string("filesystem.get_cpp_files", args, 0)?;

    let mut paths = Vec::new();
    collect_cpp_files(Path::new(dir), &mut paths)?;
    paths.sort();

    Ok(Value::Collection(
        paths.into_iter().map(serde_json::Value::String).collect(),
    ))
}

fn collect_cpp_files(dir: &Path, out: &mut Vec<String>) -> Result<(), RuntimeError> {
    let display = dir.to_string_lossy();
    let entries =
        fs::read_dir(dir).map_err(|e| io_error("filesystem.get_cpp_files", &display, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_error("filesystem.get_cpp_files", &display, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_cpp_files(&path, out)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CPP_EXTENSIONS.contains(&ext))
        {
            out.push(path.to_string_lossy().into_owned());
        }
    }
    Ok(())
}

/// `filesystem.read_file(path)` - whole file as a string
pub fn read_file(args: &[Value]) -> Result<Value, RuntimeError> {
    expect_arity("filesystem.read_file", args, 1)?;
    let path = expect_string("filesystem.read_file", args, 0)?;
    fs::read_to_string(path)
        .map(Value::String)
        .map_err(|e| io_error("filesystem.read_file", path, e))
}
