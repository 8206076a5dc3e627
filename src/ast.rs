use std::fmt::Display;

use crate::complex::ComplexNumber;

/// An expression tree node produced by the expression parser.
///
/// Every node carries the byte offset of the token it was built from so
/// evaluation errors can point back into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric or imaginary literal.
    Literal {
        /// The constant value.
        value:    ComplexNumber,
        /// Byte offset in the input.
        position: usize,
    },
    /// A prefix operation such as `-x`.
    UnaryOp {
        /// The operator applied.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Expr>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// An infix arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Expr>,
        /// The operator applied.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Expr>,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl Expr {
    /// Byte offset of the token this node was built from.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::UnaryOp { position, .. } | Self::BinaryOp { position, .. } => {
                *position
            },
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Negate,
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}
