/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOp {
    // Comparison
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,

    // Arithmetic
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Modulo (`%`)
    Modulo,
    /// Exponentiation (`**`), right-associative
    Power,

    // Logical
    /// Logical AND (`&&`), eager
    And,
    /// Logical OR (`||`), eager
    Or,
    /// Implication (`->`)
    Implies,
    /// Biconditional (`<->`)
    Iff,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    /// Logical NOT (`!`)
    Not,
    /// Numeric negation (`-`)
    Negate,
    /// Numeric identity (`+`)
    Plus,
}
