//! Runtime values for the Monkey interpreter.
//!
//! # Heap Enforcement
//!
//! Heap payloads (strings, arrays, hashes, quotes, return wrappers) are held
//! in `Heap<T>`, whose constructor is crate-private. External code builds
//! values only through the factory methods on `Value`:
//!
//! ```text
//! let s = Value::string("hello");                      // OK
//! let arr = Value::array(vec![Value::int(1)]);         // OK
//! let s = Value::Str(Heap::new("hello".to_string()));  // ERROR: Heap::new is private
//! ```
//!
//! # Control Wrappers
//!
//! `Return` and `Error` are transient: the evaluator checks for them after
//! every step and propagates them unchanged. They are never stored in an
//! array, a hash, or a binding.

mod closure;
mod heap;

use std::fmt;

use monkey_ir::{BlockStatement, Identifier, Node};

use crate::builtins::Builtin;
use crate::environment::Environment;
use crate::errors::NotQuoted;
use crate::hash_key::HashPairs;

pub use closure::Closure;
pub use heap::Heap;

/// Kind tag of a runtime value.
///
/// Appears in error messages and as the kind half of a `HashKey`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `RETURN_VALUE`, an early return in flight.
    ReturnValue,
    /// `ERROR`, a runtime fault in flight.
    Error,
    /// `STRING`
    String,
    /// `ARRAY`
    Array,
    /// `HASH`
    Hash,
    /// `FUNCTION`, a user closure.
    Function,
    /// `BUILTIN`, a native function.
    Builtin,
    /// `QUOTE`, frozen syntax.
    Quote,
    /// `MACRO`
    Macro,
}

impl ObjectType {
    /// Stable upper-case tag text.
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::ReturnValue => "RETURN_VALUE",
            ObjectType::Error => "ERROR",
            ObjectType::String => "STRING",
            ObjectType::Array => "ARRAY",
            ObjectType::Hash => "HASH",
            ObjectType::Function => "FUNCTION",
            ObjectType::Builtin => "BUILTIN",
            ObjectType::Quote => "QUOTE",
            ObjectType::Macro => "MACRO",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime value in the Monkey interpreter.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// 64-bit signed integer.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// The null value.
    Null,

    // Control wrappers
    /// Early return in flight.
    Return(Heap<Value>),
    /// Runtime fault in flight.
    Error(Heap<String>),

    // Heap Types
    /// Immutable string.
    Str(Heap<String>),
    /// Ordered sequence of values.
    Array(Heap<Vec<Value>>),
    /// Mapping from hash key to the original key and its value.
    Hash(Heap<HashPairs>),

    // Callables
    /// User function (closure).
    Function(Closure),
    /// Native builtin function.
    Builtin(Builtin),
    /// Macro: same shape as a function, invoked only during expansion.
    Macro(Closure),

    /// Unevaluated syntax.
    Quote(Heap<Node>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// The boolean value for a host `bool`.
    #[inline]
    pub fn native_bool(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Create a hash value from already keyed pairs.
    #[inline]
    pub fn hash_map(pairs: HashPairs) -> Self {
        Value::Hash(Heap::new(pairs))
    }

    /// Create an error value carrying `message`.
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(Heap::new(message.into()))
    }

    /// Wrap `value` as an early return.
    #[inline]
    pub fn return_value(value: Value) -> Self {
        Value::Return(Heap::new(value))
    }

    /// Create a function closing over `env`.
    pub fn function(params: Vec<Identifier>, body: BlockStatement, env: Environment) -> Self {
        Value::Function(Closure::new(params, body, env))
    }

    /// Create a macro closing over `env`.
    pub fn macro_value(params: Vec<Identifier>, body: BlockStatement, env: Environment) -> Self {
        Value::Macro(Closure::new(params, body, env))
    }

    /// Freeze a syntax node as a value.
    #[inline]
    pub fn quote(node: impl Into<Node>) -> Self {
        Value::Quote(Heap::new(node.into()))
    }
}

// Value Methods

impl Value {
    /// Kind tag of this value.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Value::Int(_) => ObjectType::Integer,
            Value::Bool(_) => ObjectType::Boolean,
            Value::Null => ObjectType::Null,
            Value::Return(_) => ObjectType::ReturnValue,
            Value::Error(_) => ObjectType::Error,
            Value::Str(_) => ObjectType::String,
            Value::Array(_) => ObjectType::Array,
            Value::Hash(_) => ObjectType::Hash,
            Value::Function(_) => ObjectType::Function,
            Value::Builtin(_) => ObjectType::Builtin,
            Value::Macro(_) => ObjectType::Macro,
            Value::Quote(_) => ObjectType::Quote,
        }
    }

    /// Null and `false` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            _ => true,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether a block must stop evaluating and hand this value upward.
    #[inline]
    pub fn is_control(&self) -> bool {
        matches!(self, Value::Return(_) | Value::Error(_))
    }

    /// Strip one return wrapper; used where a call hands back its result.
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::Return(inner) => Heap::unwrap_or_clone(inner),
            other => other,
        }
    }

    /// Error message, if this is an error value.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Value::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_hash(&self) -> Option<&HashPairs> {
        match self {
            Value::Hash(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Closure of a function or macro value.
    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Value::Function(closure) | Value::Macro(closure) => Some(closure),
            _ => None,
        }
    }

    /// Take the syntax out of a quote.
    ///
    /// This is the macro-expansion contract: a macro body must evaluate to a
    /// quote, and the expander splices the quoted node in place of the call.
    pub fn into_quoted_node(self) -> Result<Node, NotQuoted> {
        match self {
            Value::Quote(node) => Ok(Heap::unwrap_or_clone(node)),
            other => Err(NotQuoted {
                kind: other.object_type(),
            }),
        }
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => write!(f, "Null"),
            Value::Return(v) => write!(f, "Return({:?})", &**v),
            Value::Error(msg) => write!(f, "Error({:?})", &**msg),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Hash(pairs) => {
                f.write_str("Hash(")?;
                f.debug_map()
                    .entries(pairs.values().map(|pair| (&pair.key, &pair.value)))
                    .finish()?;
                f.write_str(")")
            }
            Value::Function(closure) => write!(f, "Function({closure:?})"),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name()),
            Value::Macro(closure) => write!(f, "Macro({closure:?})"),
            Value::Quote(node) => write!(f, "Quote({})", &**node),
        }
    }
}

/// Rendering used by `puts` and the front end. Pure and total.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::Return(v) => write!(f, "{}", &**v),
            Value::Error(msg) => write!(f, "ERROR: {}", &**msg),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Hash(pairs) => {
                f.write_str("{")?;
                for (i, pair) in pairs.values().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
            Value::Function(closure) | Value::Macro(closure) => write!(f, "{closure}"),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Quote(node) => write!(f, "QUOTE({})", &**node),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Error(a), Value::Error(b)) | (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, pair)| b.get(key).is_some_and(|other| pair.value == other.value))
            }
            // Callables are equal only to themselves
            (Value::Function(a), Value::Function(b)) | (Value::Macro(a), Value::Macro(b)) => {
                a.same_closure(b)
            }
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Quote(a), Value::Quote(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}
