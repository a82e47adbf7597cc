//! Any-node wrapper.
//!
//! Quoted values freeze a subtree of arbitrary kind; `Node` is that subtree.

use std::fmt;

use super::{Expression, Program, Statement};

/// A syntax node of any kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    Program(Program),
    Statement(Statement),
    Expression(Expression),
}

impl Node {
    /// Returns the wrapped expression, if this node is one.
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Node::Expression(expr) => Some(expr),
            _ => None,
        }
    }

    /// Unwrap into an expression, if this node is one.
    pub fn into_expression(self) -> Option<Expression> {
        match self {
            Node::Expression(expr) => Some(expr),
            _ => None,
        }
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program)
    }
}

impl From<Statement> for Node {
    fn from(stmt: Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Node::Expression(expr)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(program) => write!(f, "{program}"),
            Node::Statement(stmt) => write!(f, "{stmt}"),
            Node::Expression(expr) => write!(f, "{expr}"),
        }
    }
}
