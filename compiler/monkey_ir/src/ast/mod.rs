//! Tree-shaped AST for Monkey programs.
//!
//! Nodes own their children (`Box`/`Vec`), so a subtree can be cloned into a
//! closure or a quote and outlive the program it was parsed from.
//!
//! # Module Structure
//!
//! - `expr`: expression nodes and hash literal pairs
//! - `stmt`: statements, blocks and whole programs
//! - `operators`: prefix and infix operators
//! - `node`: the any-node wrapper carried by quotes

mod expr;
mod node;
mod operators;
mod stmt;

pub use expr::{Expression, HashLiteralPair, Identifier};
pub use node::Node;
pub use operators::{InfixOp, PrefixOp};
pub use stmt::{BlockStatement, Program, Statement};

/// Write `items` separated by `", "`.
fn write_comma_separated<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    items: &[T],
) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
