//! CLI support for quanta-lang
//!
//! Provides programmatic access to the quanta CLI functionality for
//! embedding in other tools.

use std::io;

use crate::{Diagnostic, Engine, Error};

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Engine error (lex, parse or runtime)
    Engine(Error),
    /// IO error
    Io(io::Error),
    /// No program provided
    NoProgram,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Engine(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoProgram => {
                write!(f, "No program provided. Pass one inline, use --file, or pipe to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Engine(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoProgram => None,
        }
    }
}

impl From<Error> for CliError {
    fn from(e: Error) -> Self {
        CliError::Engine(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Options for the eval command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The program to execute
    pub program: String,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckOutcome {
    /// Syntax validation passed
    Valid,
    /// Syntax validation failed
    Invalid(Vec<Diagnostic>),
}

/// Execute a program and return its result as a host JSON value.
pub fn execute_run(options: &RunOptions) -> Result<serde_json::Value, CliError> {
    let engine = Engine::new();
    let value = engine.execute(&options.program)?;
    Ok(value.to_host())
}

/// Syntax-check a program.
pub fn execute_check(program: &str) -> CheckOutcome {
    let diagnostics = Engine::new().validate(program);
    if diagnostics.is_empty() {
        CheckOutcome::Valid
    } else {
        CheckOutcome::Invalid(diagnostics)
    }
}
