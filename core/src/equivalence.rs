//! Equivalence relations used to compare the two sides of a law.
//!
//! The relation must be reflexive, symmetric and transitive. That is a
//! precondition on the caller; nothing here checks it.

/// An equivalence relation over `T`.
///
/// Any `Fn(&T, &T) -> bool` closure is an equivalence.
pub trait Equivalence<T> {
    /// Returns true if `a` and `b` are equivalent.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Exact equality via [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl<T: PartialEq> Equivalence<T> for Exact {
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Tolerance-based equality for floating-point values.
///
/// Two values are equivalent if they are equal (this covers matching
/// infinities), or if both are finite and their difference is within
/// `absolute`, or within `relative` times the larger magnitude. NaN is
/// equivalent to nothing.
///
/// # Example
///
/// ```
/// use algebra_core::{Approximate, Equivalence};
///
/// let eq = Approximate::default();
/// assert!(eq.equivalent(&(0.1_f64 + 0.2), &0.3));
/// assert!(eq.equivalent(&f64::INFINITY, &f64::INFINITY));
/// assert!(!eq.equivalent(&f64::INFINITY, &f64::NEG_INFINITY));
/// assert!(!eq.equivalent(&1.0_f64, &1.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approximate {
    /// Maximum difference relative to the larger magnitude.
    pub relative: f64,
    /// Maximum absolute difference, used near zero.
    pub absolute: f64,
}

impl Approximate {
    /// Default relative and absolute tolerance.
    pub const TOLERANCE: f64 = 1e-4;

    /// Creates an equivalence with the given tolerances.
    #[must_use]
    pub const fn new(relative: f64, absolute: f64) -> Self {
        Self { relative, absolute }
    }

    #[allow(clippy::float_cmp)]
    fn close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if a.is_nan() || b.is_nan() || a.is_infinite() || b.is_infinite() {
            return false;
        }
        let diff = magnitude(a - b);
        if diff <= self.absolute {
            return true;
        }
        let scale = {
            let (ma, mb) = (magnitude(a), magnitude(b));
            if ma > mb {
                ma
            } else {
                mb
            }
        };
        diff <= self.relative * scale
    }
}

impl Default for Approximate {
    fn default() -> Self {
        Self::new(Self::TOLERANCE, Self::TOLERANCE)
    }
}

#[inline]
fn magnitude(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

impl Equivalence<f64> for Approximate {
    fn equivalent(&self, a: &f64, b: &f64) -> bool {
        self.close(*a, *b)
    }
}

impl Equivalence<f32> for Approximate {
    fn equivalent(&self, a: &f32, b: &f32) -> bool {
        self.close(f64::from(*a), f64::from(*b))
    }
}
