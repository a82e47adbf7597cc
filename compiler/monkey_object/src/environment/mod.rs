//! Chained lexical scopes.
//!
//! Each call activation gets its own `Scope`, linked to the scope its callee
//! closed over. Closures hold the scope through a shared handle, so a scope
//! lives as long as its activation or any closure that captured it, whichever
//! is longer.
//!
//! # Thread Safety
//! Scopes are `Rc<RefCell<_>>` and therefore single-threaded. Hosts that run
//! several evaluations in parallel give each its own global `Environment`.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::value::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through `LocalScope::new()`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus the link to its enclosing scope.
#[derive(Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    outer: Option<Environment>,
}

/// Handle to a scope chain.
///
/// Cloning the handle shares the scope; it does not copy bindings.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create a top-level scope with no enclosing scope.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// Create an empty scope enclosed by `outer`.
    ///
    /// Used for every call activation; lookups that miss locally continue in
    /// `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        tracing::trace!(depth = outer.depth().saturating_add(1), "enclosed scope");
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                outer: Some(outer.clone()),
            }),
        }
    }

    /// Look up `name`, walking outward on a local miss.
    ///
    /// `None` means the identifier is unbound in the whole chain; the
    /// evaluator reports that as an error value.
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.scope.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Some(value.clone());
        }
        scope.outer.as_ref()?.get(name)
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    ///
    /// Outer scopes are never touched. Returns the stored value so that
    /// assignments can be chained.
    pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
        let previous = self
            .scope
            .borrow_mut()
            .bindings
            .insert(name.into(), value.clone());
        // Dropped after the borrow ends: the old value may hold this scope.
        drop(previous);
        value
    }

    /// Whether `name` is bound in this scope itself.
    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// The enclosing scope, if any.
    pub fn outer(&self) -> Option<Environment> {
        self.scope.borrow().outer.clone()
    }

    /// Number of enclosing scopes above this one.
    pub fn depth(&self) -> usize {
        let mut depth = 0usize;
        let mut current = self.outer();
        while let Some(env) = current {
            depth = depth.saturating_add(1);
            current = env.outer();
        }
        depth
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    /// Names bound in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scope.borrow().bindings.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Values are left out: a binding may be a closure over this scope.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.local_names())
            .field("depth", &self.depth())
            .finish()
    }
}
