//! Runtime object model for the Monkey interpreter.
//!
//! This crate holds everything a tree-walking evaluator needs besides the
//! evaluator itself:
//!
//! - `Value`: the tagged runtime value, with its `ObjectType` kind tag
//! - `HashKey`: the hashable identity of integers, booleans, and strings
//! - `Environment`: chained lexical scopes shared by closures
//! - `Closure`: the payload of function and macro values
//! - `BuiltinRegistry`: `len`, `first`, `last`, `rest`, `push`, and `puts`
//!
//! Language-level faults are ordinary `Value::Error`s built by the
//! constructors in [`errors`]; host-level misuse surfaces as typed errors.

#![deny(clippy::arithmetic_side_effects)]

mod builtins;
mod environment;
pub mod errors;
mod hash_key;
mod print_handler;
mod value;

pub use builtins::{Builtin, BuiltinRegistry};
pub use environment::{Environment, LocalScope};
pub use errors::{HashIndexError, NotQuoted, UnhashableValue};
pub use hash_key::{fnv1a_64, HashKey, HashPair, HashPairs};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{Closure, Heap, ObjectType, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, so embedding hosts keep control of
/// their own subscriber. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init();
    });
}
