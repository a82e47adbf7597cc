//! Native builtin functions and the registry that resolves them by name.
//!
//! Builtins are a closed enum with direct dispatch, not a table of trait
//! objects. Each takes its arguments as a slice and returns exactly one
//! value: the result, or an error value for arity and type faults.
//!
//! | Name    | Arity | Behaviour                                        |
//! |---------|-------|--------------------------------------------------|
//! | `len`   | 1     | byte length of a string, element count of array |
//! | `first` | 1     | first element, or null when empty                |
//! | `last`  | 1     | last element, or null when empty                 |
//! | `rest`  | 1     | new array without the first element, or null     |
//! | `push`  | 2     | new array with the value appended                |
//! | `puts`  | any   | writes each rendering on its own line; null      |
//!
//! Arrays are persistent from a builtin's point of view: `rest` and `push`
//! build new arrays and leave their input untouched.

use crate::environment::Environment;
use crate::errors::{argument_must_be, unsupported_argument, wrong_arg_count};
use crate::print_handler::{stdout_handler, PrintHandlerImpl, SharedPrintHandler};
use crate::value::{ObjectType, Value};

/// A native builtin function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 6] = [
        Builtin::Len,
        Builtin::First,
        Builtin::Last,
        Builtin::Rest,
        Builtin::Push,
        Builtin::Puts,
    ];

    /// The name the builtin is bound to.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
            Builtin::Puts => "puts",
        }
    }

    /// Resolve a builtin by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Run the builtin. `out` receives the output of `puts`.
    pub fn call(self, args: &[Value], out: &PrintHandlerImpl) -> Value {
        tracing::trace!(builtin = self.name(), argc = args.len(), "builtin call");
        match self {
            Builtin::Len => len(args),
            Builtin::First => first(args),
            Builtin::Last => last(args),
            Builtin::Rest => rest(args),
            Builtin::Push => push(args),
            Builtin::Puts => puts(args, out),
        }
    }
}

/// Name-to-builtin table.
///
/// Built once, read-only afterwards, and shareable across threads; it owns
/// the output channel `puts` writes to.
pub struct BuiltinRegistry {
    print_handler: SharedPrintHandler,
}

impl BuiltinRegistry {
    /// Create a registry whose `puts` writes to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// Create a registry whose `puts` writes to `print_handler`.
    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        tracing::debug!(count = Builtin::ALL.len(), "builtin registry initialized");
        BuiltinRegistry { print_handler }
    }

    /// Look up a builtin by exact name, as a callable value.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        Builtin::from_name(name).map(Value::Builtin)
    }

    /// Invoke `builtin` with this registry's output channel.
    pub fn call(&self, builtin: Builtin, args: &[Value]) -> Value {
        builtin.call(args, &self.print_handler)
    }

    /// The output channel used by `puts`.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Names of all builtins.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        Builtin::ALL.into_iter().map(Builtin::name)
    }

    /// Get the number of registered builtins.
    pub fn len(&self) -> usize {
        Builtin::ALL.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Bind every builtin by name in `env`.
    ///
    /// For hosts that resolve builtins through the global scope instead of a
    /// fallback lookup. Existing bindings with the same names are replaced.
    pub fn register_into(&self, env: &Environment) {
        for builtin in Builtin::ALL {
            env.set(builtin.name(), Value::Builtin(builtin));
        }
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Implementations

/// Return the single argument of a one-argument builtin.
fn single_arg(args: &[Value]) -> Result<&Value, Value> {
    match args {
        [arg] => Ok(arg),
        _ => Err(wrong_arg_count(args.len(), 1)),
    }
}

/// Return the array argument of a one-argument array builtin.
fn single_array<'a>(name: &str, args: &'a [Value]) -> Result<&'a [Value], Value> {
    let arg = single_arg(args)?;
    arg.as_array()
        .ok_or_else(|| argument_must_be(name, ObjectType::Array, arg.object_type()))
}

fn count(n: usize) -> Value {
    Value::int(i64::try_from(n).unwrap_or(i64::MAX))
}

fn len(args: &[Value]) -> Value {
    let arg = match single_arg(args) {
        Ok(arg) => arg,
        Err(err) => return err,
    };
    match arg {
        Value::Str(s) => count(s.len()),
        Value::Array(items) => count(items.len()),
        other => unsupported_argument("len", other.object_type()),
    }
}

fn first(args: &[Value]) -> Value {
    match single_array("first", args) {
        Ok(items) => items.first().cloned().unwrap_or(Value::Null),
        Err(err) => err,
    }
}

fn last(args: &[Value]) -> Value {
    match single_array("last", args) {
        Ok(items) => items.last().cloned().unwrap_or(Value::Null),
        Err(err) => err,
    }
}

fn rest(args: &[Value]) -> Value {
    match single_array("rest", args) {
        Ok([_, tail @ ..]) => Value::array(tail.to_vec()),
        Ok([]) => Value::Null,
        Err(err) => err,
    }
}

fn push(args: &[Value]) -> Value {
    let [target, item] = args else {
        return wrong_arg_count(args.len(), 2);
    };
    let Some(items) = target.as_array() else {
        return argument_must_be("push", ObjectType::Array, target.object_type());
    };
    let mut extended = Vec::with_capacity(items.len().saturating_add(1));
    extended.extend_from_slice(items);
    extended.push(item.clone());
    Value::array(extended)
}

fn puts(args: &[Value], out: &PrintHandlerImpl) -> Value {
    for arg in args {
        out.println(&arg.to_string());
    }
    Value::Null
}

#[cfg(test)]
mod tests;
