//! Expression Types
//!
//! Every expression renders to the parenthesized source form the runtime uses
//! when it prints closures and quotes.

use std::fmt;

use super::{write_comma_separated, BlockStatement, InfixOp, PrefixOp};

/// An identifier, as bound by `let` or listed as a parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }

    /// The identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One `key: value` entry of a hash literal, in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct HashLiteralPair {
    pub key: Expression,
    pub value: Expression,
}

impl fmt::Display for HashLiteralPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    /// Variable reference: `x`
    Identifier(Identifier),

    /// Integer literal: `42`
    Integer(i64),

    /// Boolean literal: `true`, `false`
    Boolean(bool),

    /// String literal: `"hello"` (stored without quotes)
    Str(String),

    /// Prefix operation: `!ok`, `-x`
    Prefix {
        op: PrefixOp,
        right: Box<Expression>,
    },

    /// Infix operation: `left op right`
    Infix {
        left: Box<Expression>,
        op: InfixOp,
        right: Box<Expression>,
    },

    /// Conditional: `if (cond) { ... } else { ... }`
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },

    /// Function literal: `fn(x, y) { ... }`
    Function {
        params: Vec<Identifier>,
        body: BlockStatement,
    },

    /// Call: `callee(args)`
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },

    /// Array literal: `[a, b, c]`
    Array(Vec<Expression>),

    /// Index access: `left[index]`
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },

    /// Hash literal: `{k: v, ...}`
    Hash(Vec<HashLiteralPair>),

    /// Macro literal: `macro(x, y) { ... }`
    Macro {
        params: Vec<Identifier>,
        body: BlockStatement,
    },
}

impl Expression {
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn int(value: i64) -> Self {
        Expression::Integer(value)
    }

    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Str(value.into())
    }

    pub fn prefix(op: PrefixOp, right: Expression) -> Self {
        Expression::Prefix {
            op,
            right: Box::new(right),
        }
    }

    pub fn infix(left: Expression, op: InfixOp, right: Expression) -> Self {
        Expression::Infix {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn if_else(
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        }
    }

    pub fn function(params: Vec<Identifier>, body: BlockStatement) -> Self {
        Expression::Function { params, body }
    }

    pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            function: Box::new(function),
            arguments,
        }
    }

    pub fn array(elements: Vec<Expression>) -> Self {
        Expression::Array(elements)
    }

    pub fn index(left: Expression, index: Expression) -> Self {
        Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        }
    }

    pub fn hash_literal(pairs: Vec<(Expression, Expression)>) -> Self {
        Expression::Hash(
            pairs
                .into_iter()
                .map(|(key, value)| HashLiteralPair { key, value })
                .collect(),
        )
    }

    pub fn macro_literal(params: Vec<Identifier>, body: BlockStatement) -> Self {
        Expression::Macro { params, body }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer(n) => write!(f, "{n}"),
            Expression::Boolean(b) => write!(f, "{b}"),
            Expression::Str(s) => f.write_str(s),
            Expression::Prefix { op, right } => write!(f, "({op}{right})"),
            Expression::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            }
            Expression::Function { params, body } => {
                f.write_str("fn(")?;
                write_comma_separated(f, params)?;
                write!(f, ") {body}")
            }
            Expression::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                write_comma_separated(f, arguments)?;
                f.write_str(")")
            }
            Expression::Array(elements) => {
                f.write_str("[")?;
                write_comma_separated(f, elements)?;
                f.write_str("]")
            }
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
            Expression::Hash(pairs) => {
                f.write_str("{")?;
                write_comma_separated(f, pairs)?;
                f.write_str("}")
            }
            Expression::Macro { params, body } => {
                f.write_str("macro(")?;
                write_comma_separated(f, params)?;
                write!(f, ") {body}")
            }
        }
    }
}
