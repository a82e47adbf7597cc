//! Reference-counted payload wrapper for heap values.
//!
//! `Heap::new` is crate-private: every heap-backed `Value` is built through
//! a `Value::` factory method. Values never cross threads (closures hold
//! `Rc` scopes), so the count is non-atomic.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared, immutable heap payload of a runtime value.
#[repr(transparent)]
pub struct Heap<T>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: Clone> Heap<T> {
    /// Take the payload, cloning it only if other handles still share it.
    #[inline]
    pub fn unwrap_or_clone(this: Self) -> T {
        Rc::unwrap_or_clone(this.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        Heap::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Heap<T> {}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests;
