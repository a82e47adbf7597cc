//! Statement Types
//!
//! Statements, blocks and whole programs. A block renders as the plain
//! concatenation of its statements; braces are not part of the output.

use std::fmt;

use super::{Expression, Identifier};

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    /// Let binding: `let name = value;`
    Let { name: Identifier, value: Expression },

    /// Early return: `return value;`
    Return { value: Expression },

    /// Expression statement
    Expression(Expression),

    /// Nested block: `{ ... }`
    Block(BlockStatement),
}

impl Statement {
    pub fn let_binding(name: impl Into<String>, value: Expression) -> Self {
        Statement::Let {
            name: Identifier::new(name),
            value,
        }
    }

    pub fn return_value(value: Expression) -> Self {
        Statement::Return { value }
    }

    pub fn expression(expr: Expression) -> Self {
        Statement::Expression(expr)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return { value } => write!(f, "return {value};"),
            Statement::Expression(expr) => write!(f, "{expr}"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}

/// Sequence of statements forming a function, macro or branch body.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }

    /// Number of statements in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the block has no statements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

/// Root of a parsed source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
