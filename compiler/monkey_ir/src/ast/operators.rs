//! Prefix and Infix Operators
//!
//! # Trait Requirements
//! All types are Copy, Clone, Eq, `PartialEq`, Hash, Debug.

use std::fmt;

/// Prefix (unary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOp {
    /// Logical not (`!`).
    Not,
    /// Arithmetic negation (`-`).
    Neg,
}

impl PrefixOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Infix (binary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InfixOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// Check if this is a comparison operator (result is a boolean).
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::Eq | Self::NotEq)
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
