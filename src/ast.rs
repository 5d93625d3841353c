//! # Quanta Logic Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the quanta logic
//! language (".a format"), a small quantified expression language for
//! validation rules over structured data.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, variables, operations,
//!   quantifiers, conditionals)
//! - **[operators]** - Binary and unary operators
//! - **[program]** - A complete program: a flat statement list
//!
//! ## Quick Start
//!
//! ```text
//! forall $f in filesystem.get_cpp_files("src"): string.contains($f, ".cpp")
//! ```
//!
//! This rule checks that every discovered file path mentions `.cpp`.
//!
//! ## Core Concepts
//!
//! ### Statements
//!
//! A program is a newline- or `;`-separated sequence of expressions. There
//! are no blocks and no user-defined functions; the program's value is the
//! value of its last statement.
//!
//! ### Quantifiers
//!
//! `forall` and `exists` range over collections and bind one variable:
//!
//! ```text
//! forall $x in [1, 2, 3]: $x > 0
//! exists $name in $users: string.starts_with($name, "admin")
//! ```
//!
//! ### Type System
//!
//! Values are booleans, 64-bit integers, 64-bit floats, strings, and
//! collections of host structured values. Arithmetic requires matching
//! numeric kinds; equality compares integers and floats numerically; type
//! errors surface during evaluation, never earlier.
pub mod tokens;
pub mod expressions;
pub mod operators;
pub mod program;

pub use tokens::{Token, TokenKind};
pub use expressions::{Expr, QuantifierKind};
pub use operators::{BinOp, UnaryOp};
pub use program::Program;
