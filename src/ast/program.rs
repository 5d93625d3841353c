use crate::ast::Expr;

/// A complete parsed program.
///
/// A program is a flat, ordered list of statements; each statement is one
/// expression. Evaluation runs the statements in order and yields the last
/// statement's value (an empty program yields `true`).
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Expr>,
}
