use crate::ast::{BinOp, UnaryOp};

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Each variant carries typed payload fields, so the evaluator matches
/// exhaustively at compile time instead of inspecting kind tags at runtime.
/// The tree is strict: every node owns its children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // Literals
    /// Integer literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Integer(i64),

    /// Floating-point literal
    ///
    /// # Example
    /// ```text
    /// 3.14
    /// ```
    Float(f64),

    /// Boolean literal
    Boolean(bool),

    /// String literal
    ///
    /// # Example
    /// ```text
    /// "hello"
    /// ```
    Str(String),

    /// Variable reference (`$name`)
    ///
    /// Resolved against the scope stack at evaluation time, innermost
    /// scope first.
    Variable(String),

    /// Collection literal
    ///
    /// # Example
    /// ```text
    /// [1, 2, 3]
    /// ```
    Collection(Vec<Expr>),

    /// Unary operation (`!`, `-`, `+`)
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    /// Binary operation (arithmetic, comparison, logical)
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Native function call
    ///
    /// Only an identifier immediately followed by `(` parses as a call;
    /// names may be dot-qualified.
    ///
    /// # Examples
    /// ```text
    /// string.length($name)
    /// peano.successor(41)
    /// ```
    Call {
        name: String,
        args: Vec<Expr>,
    },

    /// Quantified expression over a collection
    ///
    /// # Examples
    /// ```text
    /// forall $x in $items: $x > 0
    /// exists $f in filesystem.get_files("src"): string.contains($f, "main")
    /// ```
    Quantifier {
        kind: QuantifierKind,
        var: String,
        domain: Box<Expr>,
        condition: Box<Expr>,
    },

    /// Conditional expression
    ///
    /// Both the ternary form `c ? a : b` and the keyword form
    /// `if c then a else b` produce this node. Exactly one branch is
    /// evaluated.
    Conditional {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

/// The two quantifier flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantifierKind {
    /// `forall`: vacuously true on an empty domain, stops false on the
    /// first failing element
    Forall,

    /// `exists`: false on an empty domain, stops true on the first
    /// matching element
    Exists,
}
