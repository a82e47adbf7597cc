//! Monkey IR - syntax tree types for the Monkey interpreter.
//!
//! This crate is the contract between the parser and the runtime:
//! - Statement and expression nodes (`Statement`, `Expression`)
//! - Identifier and block nodes embedded by closures
//! - `Node`, the payload carried by a quoted value
//!
//! Every node renders back to source text through `Display`. The runtime
//! relies on that rendering for function, macro and quote output, so it is
//! pure and total.
//!
//! # Trait Requirements
//!
//! Every node type implements Clone, Eq, Hash and Debug so trees can be
//! frozen inside runtime values and compared in tests.

pub mod ast;

pub use ast::{
    BlockStatement, Expression, HashLiteralPair, Identifier, InfixOp, Node, PrefixOp, Program,
    Statement,
};
