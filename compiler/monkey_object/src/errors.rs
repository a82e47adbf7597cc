//! Centralized runtime error constructors.
//!
//! Every language-level fault is a `Value::Error`; the message texts live
//! here so the evaluator and the builtins share one import point.
//!
//! # Usage
//!
//! ```ignore
//! use monkey_object::errors::{identifier_not_found, type_mismatch};
//! ```
//!
//! Host-level errors (`UnhashableValue`, `NotQuoted`) are typed so callers can
//! match on them, and convert into the matching error value with `From`.

use std::fmt;

use monkey_ir::{InfixOp, PrefixOp};

use crate::value::{ObjectType, Value};

// Name Resolution Errors

/// Unbound identifier.
#[cold]
pub fn identifier_not_found(name: &str) -> Value {
    Value::error(format!("identifier not found: {name}"))
}

// Operator Errors

/// Infix operands of different kinds.
#[cold]
pub fn type_mismatch(left: ObjectType, op: InfixOp, right: ObjectType) -> Value {
    Value::error(format!("type mismatch: {left} {op} {right}"))
}

/// Prefix operator applied to an unsupported kind.
#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, right: ObjectType) -> Value {
    Value::error(format!("unknown operator: {op}{right}"))
}

/// Infix operator not defined for these (same-kind) operands.
#[cold]
pub fn unknown_infix_operator(left: ObjectType, op: InfixOp, right: ObjectType) -> Value {
    Value::error(format!("unknown operator: {left} {op} {right}"))
}

// Call Errors

/// Call target is not a function or builtin.
#[cold]
pub fn not_a_function(kind: ObjectType) -> Value {
    Value::error(format!("not a function: {kind}"))
}

/// Function called with the wrong number of arguments.
#[cold]
pub fn wrong_param_count(want: usize, got: usize) -> Value {
    Value::error(format!("wrong number of arguments: want={want}, got={got}"))
}

// Index Errors

/// Key kind without a hash key.
#[cold]
pub fn unusable_as_hash_key(kind: ObjectType) -> Value {
    Value::error(format!("unusable as hash key: {kind}"))
}

/// Index expression on a kind that cannot be indexed.
#[cold]
pub fn index_not_supported(kind: ObjectType) -> Value {
    Value::error(format!("index operator not supported: {kind}"))
}

// Builtin Errors

/// Builtin called with the wrong number of arguments.
#[cold]
pub fn wrong_arg_count(got: usize, want: usize) -> Value {
    Value::error(format!("wrong number of arguments. got={got}, want={want}"))
}

/// Builtin argument of a kind it has no behaviour for.
#[cold]
pub fn unsupported_argument(builtin: &str, got: ObjectType) -> Value {
    Value::error(format!("argument to `{builtin}` not supported, got {got}"))
}

/// Builtin argument of the wrong kind.
#[cold]
pub fn argument_must_be(builtin: &str, expected: ObjectType, got: ObjectType) -> Value {
    Value::error(format!("argument to `{builtin}` must be {expected}, got {got}"))
}

// Macro Errors

/// Macro body produced something other than a quote.
#[cold]
pub fn macro_result_not_quote(kind: ObjectType) -> Value {
    Value::error(format!("macro must return a quoted node, got {kind}"))
}

// Typed host errors

/// A hash key was requested for a kind that has none.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnhashableValue {
    pub kind: ObjectType,
}

impl fmt::Display for UnhashableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unusable as hash key: {}", self.kind)
    }
}

impl std::error::Error for UnhashableValue {}

impl From<UnhashableValue> for Value {
    fn from(err: UnhashableValue) -> Self {
        unusable_as_hash_key(err.kind)
    }
}

/// Hash indexing fault.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HashIndexError {
    /// The indexed value is not a hash.
    NotAHash(ObjectType),
    /// The key has no hash key.
    Unhashable(UnhashableValue),
}

impl fmt::Display for HashIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashIndexError::NotAHash(kind) => write!(f, "index operator not supported: {kind}"),
            HashIndexError::Unhashable(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for HashIndexError {}

impl From<UnhashableValue> for HashIndexError {
    fn from(err: UnhashableValue) -> Self {
        HashIndexError::Unhashable(err)
    }
}

impl From<HashIndexError> for Value {
    fn from(err: HashIndexError) -> Self {
        match err {
            HashIndexError::NotAHash(kind) => index_not_supported(kind),
            HashIndexError::Unhashable(err) => err.into(),
        }
    }
}

/// A macro produced a non-quote value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NotQuoted {
    pub kind: ObjectType,
}

impl fmt::Display for NotQuoted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "macro must return a quoted node, got {}", self.kind)
    }
}

impl std::error::Error for NotQuoted {}

impl From<NotQuoted> for Value {
    fn from(err: NotQuoted) -> Self {
        macro_result_not_quote(err.kind)
    }
}
