//! Operations: shared, pure closures over a value type.
//!
//! An operation has no identity beyond its behavior. Cloning is an `Arc`
//! bump, so structures can be rewrapped (widened, lifted) without copying
//! closures.

use alloc::sync::Arc;
use core::fmt;

/// Types a structure can be defined over.
///
/// Blanket-implemented for every clonable, thread-safe `'static` type.
pub trait Value: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Value for T {}

/// A closed binary operation `(T, T) -> T`.
///
/// The closure must be pure and total: law checks call it repeatedly and in
/// any order.
///
/// # Example
///
/// ```
/// use algebra_core::Operation;
///
/// let max = Operation::new(|a: &u8, b: &u8| *a.max(b));
/// assert_eq!(max.call(&3, &9), 9);
/// ```
pub struct Operation<T>(Arc<dyn Fn(&T, &T) -> T + Send + Sync>);

impl<T> Operation<T> {
    /// Wraps a closure as an operation.
    pub fn new(f: impl Fn(&T, &T) -> T + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Applies the operation.
    #[inline]
    pub fn call(&self, a: &T, b: &T) -> T {
        (self.0)(a, b)
    }
}

impl<T> Clone for Operation<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Operation(..)")
    }
}

/// A unary map `T -> T` (inverse, negation, reciprocal).
pub struct UnaryOperation<T>(Arc<dyn Fn(&T) -> T + Send + Sync>);

impl<T> UnaryOperation<T> {
    /// Wraps a closure as a unary operation.
    pub fn new(f: impl Fn(&T) -> T + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Applies the operation.
    #[inline]
    pub fn call(&self, a: &T) -> T {
        (self.0)(a)
    }
}

impl<T> Clone for UnaryOperation<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for UnaryOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnaryOperation(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_call() {
        let add = Operation::new(|a: &u8, b: &u8| a.wrapping_add(*b));
        assert_eq!(add.call(&250, &10), 4);
    }

    #[test]
    fn test_operation_clone_shares_closure() {
        let sub = Operation::new(|a: &i32, b: &i32| a - b);
        let copy = sub.clone();
        assert_eq!(sub.call(&5, &3), copy.call(&5, &3));
    }

    #[test]
    fn test_unary_operation_call() {
        let neg = UnaryOperation::new(|a: &i32| -a);
        assert_eq!(neg.call(&4), -4);
        assert_eq!(neg.call(&neg.call(&4)), 4);
    }
}
