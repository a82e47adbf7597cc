//! Closures: the shared shape of function and macro values.
//!
//! A closure pairs parameter names and a body block with the `Environment`
//! that was active where the literal was evaluated. The captured scope is a
//! shared handle, so it stays alive for as long as any closure over it does.

use std::fmt;

use monkey_ir::{BlockStatement, Identifier};

use super::{Heap, Value};
use crate::environment::Environment;
use crate::errors::wrong_param_count;

/// Parameters, body and defining scope of a function or macro.
#[derive(Clone)]
pub struct Closure {
    params: Heap<Vec<Identifier>>,
    body: Heap<BlockStatement>,
    env: Environment,
}

impl Closure {
    /// Capture `env` for a literal with the given parameters and body.
    pub fn new(params: Vec<Identifier>, body: BlockStatement, env: Environment) -> Self {
        Closure {
            params: Heap::new(params),
            body: Heap::new(body),
            env,
        }
    }

    /// Parameter names, in declaration order.
    #[inline]
    pub fn params(&self) -> &[Identifier] {
        &self.params
    }

    #[inline]
    pub fn body(&self) -> &BlockStatement {
        &self.body
    }

    /// The scope captured at the definition site.
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Create the activation scope for a call.
    ///
    /// The new scope is enclosed by the captured one and binds each parameter
    /// to the argument at the same position. A count mismatch is reported as
    /// a language error value, never a host failure.
    pub fn extend_env(&self, args: &[Value]) -> Result<Environment, Value> {
        if args.len() != self.params.len() {
            return Err(wrong_param_count(self.params.len(), args.len()));
        }
        let activation = Environment::new_enclosed(&self.env);
        for (param, arg) in self.params.iter().zip(args) {
            activation.set(param.as_str(), arg.clone());
        }
        Ok(activation)
    }

    /// Identity comparison: same literal allocation and same captured scope.
    pub fn same_closure(&self, other: &Closure) -> bool {
        Heap::ptr_eq(&self.body, &other.body) && self.env.ptr_eq(&other.env)
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {{\n{}\n}}", &*self.body)
    }
}

// The captured scope is left out: it can hold this very closure.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &*self.params)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}
