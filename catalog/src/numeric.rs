//! Integers, naturals and reals.
//!
//! Integer and natural arithmetic wraps, so every operation is total and
//! the ring laws hold exactly modulo 2⁶⁴. Real arithmetic is IEEE-754 and
//! only satisfies its laws up to [`Approximate`](algebra_core::Approximate).

use algebra_core::{
    AbelianGroup, BoundedSemilattice, CommutativeMonoid, CommutativeRing, CommutativeSemiring,
    Field, Instance,
};
use proptest::prelude::*;

// =============================================================================
// Integers
// =============================================================================

/// `(i64, +, 0, -)`.
pub fn sum() -> Instance<AbelianGroup<i64>> {
    Instance::new(
        "sum",
        AbelianGroup::new(|a: &i64, b: &i64| a.wrapping_add(*b), 0, |a: &i64| a.wrapping_neg()),
    )
}

/// `(i64, ×, 1)`.
pub fn product() -> Instance<CommutativeMonoid<i64>> {
    Instance::new(
        "product",
        CommutativeMonoid::new(|a: &i64, b: &i64| a.wrapping_mul(*b), 1),
    )
}

/// `(i64, max, i64::MIN)`.
pub fn max() -> Instance<BoundedSemilattice<i64>> {
    Instance::new("max", BoundedSemilattice::new(|a: &i64, b: &i64| *a.max(b), i64::MIN))
}

/// `(i64, min, i64::MAX)`.
pub fn min() -> Instance<BoundedSemilattice<i64>> {
    Instance::new("min", BoundedSemilattice::new(|a: &i64, b: &i64| *a.min(b), i64::MAX))
}

/// The integers modulo 2⁶⁴ as a commutative ring of [`sum`] and [`product`].
pub fn integers() -> Instance<CommutativeRing<i64>> {
    Instance::new(
        "integers",
        CommutativeRing::new(sum().into_structure(), product().into_structure()),
    )
}

// =============================================================================
// Naturals
// =============================================================================

/// `(u64, +, 0)`.
pub fn natural_sum() -> Instance<CommutativeMonoid<u64>> {
    Instance::new(
        "natural sum",
        CommutativeMonoid::new(|a: &u64, b: &u64| a.wrapping_add(*b), 0),
    )
}

/// `(u64, ×, 1)`.
pub fn natural_product() -> Instance<CommutativeMonoid<u64>> {
    Instance::new(
        "natural product",
        CommutativeMonoid::new(|a: &u64, b: &u64| a.wrapping_mul(*b), 1),
    )
}

/// [`natural_sum`] and [`natural_product`] as a commutative semiring.
pub fn naturals() -> Instance<CommutativeSemiring<u64>> {
    Instance::new(
        "naturals",
        CommutativeSemiring::new(
            natural_sum().into_structure(),
            natural_product().into_structure(),
        ),
    )
}

// =============================================================================
// Reals
// =============================================================================

/// Real multiplication, except that `0·∞` and `∞·0` are `1`.
///
/// With that convention `∞` is the reciprocal of `0` and the nonzero reals
/// extended by `0` and `±∞` satisfy the group laws.
pub fn real_times(a: &f64, b: &f64) -> f64 {
    let zero_times_inf = |x: f64, y: f64| x == 0.0 && y.is_infinite();
    if zero_times_inf(*a, *b) || zero_times_inf(*b, *a) {
        1.0
    } else {
        a * b
    }
}

/// `(f64, +, 0, -)`.
pub fn real_sum() -> Instance<AbelianGroup<f64>> {
    Instance::new("real sum", AbelianGroup::new(|a: &f64, b: &f64| a + b, 0.0, |a: &f64| -a))
}

/// `(f64, ×, 1, 1/x)` with [`real_times`] as the operation.
pub fn real_product() -> Instance<AbelianGroup<f64>> {
    Instance::new("real product", AbelianGroup::new(real_times, 1.0, |a: &f64| 1.0 / a))
}

/// The reals as a field of [`real_sum`] and [`real_product`].
pub fn real() -> Instance<Field<f64>> {
    Instance::new(
        "real",
        Field::new(real_sum().into_structure(), real_product().into_structure()),
    )
}

/// Finite reals of moderate magnitude, with zero drawn explicitly.
///
/// Large magnitudes make sums of opposite-sign products lose all precision,
/// which no fixed tolerance can absorb.
pub fn reals() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0e3..1.0e3_f64,
        1 => Just(0.0),
        1 => Just(1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_core::prelude::*;
    use algebra_core::{Approximate, Exact, LawId};

    #[test]
    fn test_integer_arithmetic_wraps() {
        let z = integers();
        let z = z.structure();
        assert_eq!(z.plus(&i64::MAX, &1), i64::MIN);
        assert_eq!(z.negate(&i64::MIN), i64::MIN);
        assert_eq!(z.times(&(1 << 62), &4), 0);
        assert_eq!(*z.zero(), 0);
        assert_eq!(*z.one(), 1);
    }

    #[test]
    fn test_bounds_are_identities() {
        assert_eq!(max().structure().apply(&i64::MIN, &-5), -5);
        assert_eq!(min().structure().apply(&i64::MAX, &-5), -5);
        assert_eq!(max().structure().check(LawId::Identity, &Exact, &[i64::MIN]), Some(true));
    }

    #[test]
    fn test_zero_times_infinity_is_one() {
        assert_eq!(real_times(&0.0, &f64::INFINITY), 1.0);
        assert_eq!(real_times(&f64::NEG_INFINITY, &0.0), 1.0);
        assert_eq!(real_times(&-0.0, &f64::INFINITY), 1.0);
        assert_eq!(real_times(&2.0, &f64::INFINITY), f64::INFINITY);
        assert_eq!(real_times(&2.0, &3.0), 6.0);
    }

    #[test]
    fn test_zero_has_a_reciprocal() {
        let product = real_product();
        let group = product.structure();
        assert_eq!(group.inverse(&0.0), f64::INFINITY);
        assert_eq!(group.check(LawId::Inverse, &Exact, &[0.0]), Some(true));
    }

    #[test]
    fn test_real_field_reciprocity() {
        let field = real();
        let eq = Approximate::default();
        for a in [0.0, 3.0, -0.125, 1e3] {
            assert_eq!(field.structure().check(LawId::Reciprocity, &eq, &[a]), Some(true));
        }
    }

    #[test]
    fn test_naturals_annihilation() {
        let n = naturals();
        assert_eq!(n.structure().check(LawId::Annihilation, &Exact, &[42]), Some(true));
        assert_eq!(n.laws().len(), 8);
    }
}
