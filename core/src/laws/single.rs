//! Laws over a single operation.

use crate::equivalence::Equivalence;
use crate::kind::{Associative, Commutative, Idempotent};
use crate::structure::{Identity, Inverse, Structure};

/// `(a·b)·c = a·(b·c)`
pub fn associativity<S>(
    s: &S,
    eq: &dyn Equivalence<S::Value>,
    a: &S::Value,
    b: &S::Value,
    c: &S::Value,
) -> bool
where
    S: Structure + ?Sized,
    S::Kind: Associative,
{
    let left = s.apply(&s.apply(a, b), c);
    let right = s.apply(a, &s.apply(b, c));
    eq.equivalent(&left, &right)
}

/// `a·b = b·a`
pub fn commutativity<S>(s: &S, eq: &dyn Equivalence<S::Value>, a: &S::Value, b: &S::Value) -> bool
where
    S: Structure + ?Sized,
    S::Kind: Commutative,
{
    eq.equivalent(&s.apply(a, b), &s.apply(b, a))
}

/// `b·b = b` and `(a·b)·b = a·b`
///
/// The second clause alone admits constant operations (`x·y = 0`), so the
/// first is checked on the same operands.
pub fn idempotency<S>(s: &S, eq: &dyn Equivalence<S::Value>, a: &S::Value, b: &S::Value) -> bool
where
    S: Structure + ?Sized,
    S::Kind: Idempotent,
{
    let ab = s.apply(a, b);
    eq.equivalent(&s.apply(b, b), b) && eq.equivalent(&s.apply(&ab, b), &ab)
}

/// `a·e = a = e·a`
pub fn identity<S>(s: &S, eq: &dyn Equivalence<S::Value>, a: &S::Value) -> bool
where
    S: Identity + ?Sized,
{
    let e = s.empty();
    eq.equivalent(&s.apply(a, e), a) && eq.equivalent(&s.apply(e, a), a)
}

/// `a·a⁻¹ = e = a⁻¹·a`
pub fn inverse<S>(s: &S, eq: &dyn Equivalence<S::Value>, a: &S::Value) -> bool
where
    S: Inverse + ?Sized,
{
    let inv = s.inverse(a);
    let e = s.empty();
    eq.equivalent(&s.apply(a, &inv), e) && eq.equivalent(&s.apply(&inv, a), e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::Exact;
    use crate::structure::{AbelianGroup, Band, CommutativeSemigroup, Group, Monoid, Semigroup};

    #[test]
    fn test_associativity() {
        let add = Semigroup::new(|a: &i64, b: &i64| a.wrapping_add(*b));
        let sub = Semigroup::new(|a: &i64, b: &i64| a.wrapping_sub(*b));
        assert!(associativity(&add, &Exact, &1, &2, &3));
        assert!(!associativity(&sub, &Exact, &1, &2, &3));
        // subtraction is associative on some triples
        assert!(associativity(&sub, &Exact, &5, &0, &0));
    }

    #[test]
    fn test_commutativity() {
        let pow = CommutativeSemigroup::new(|a: &u32, b: &u32| a.wrapping_pow(*b));
        assert!(!commutativity(&pow, &Exact, &2, &3));
        assert!(commutativity(&pow, &Exact, &2, &2));
    }

    #[test]
    fn test_idempotency_uses_two_operands() {
        let left = Band::new(|a: &u8, _: &u8| *a);
        let right = Band::new(|_: &u8, b: &u8| *b);
        assert!(idempotency(&left, &Exact, &1, &2));
        assert!(idempotency(&right, &Exact, &1, &2));
        let add = Band::new(|a: &u8, b: &u8| a.wrapping_add(*b));
        assert!(!idempotency(&add, &Exact, &1, &2));
        assert!(idempotency(&add, &Exact, &1, &0));
    }

    #[test]
    fn test_constant_operation_is_not_idempotent() {
        let zero = Band::new(|_: &u8, _: &u8| 0);
        assert!(!idempotency(&zero, &Exact, &0, &1));
        assert!(!idempotency(&zero, &Exact, &5, &5));
        assert!(idempotency(&zero, &Exact, &7, &0));
        // the second clause alone is satisfied everywhere
        for a in 0..=u8::MAX {
            for b in [0, 1, u8::MAX] {
                let ab = zero.apply(&a, &b);
                assert_eq!(zero.apply(&ab, &b), ab);
            }
        }
    }

    #[test]
    fn test_identity_checks_both_sides() {
        // left projection: e·a = e, so only the right identity holds
        let m = Monoid::new(|a: &u8, _: &u8| *a, 0);
        assert!(!identity(&m, &Exact, &4));
        assert!(identity(&m, &Exact, &0));
    }

    #[test]
    fn test_inverse() {
        let g = AbelianGroup::new(|a: &u8, b: &u8| a.wrapping_add(*b), 0, |a: &u8| a.wrapping_neg());
        for a in 0..=u8::MAX {
            assert!(inverse(&g, &Exact, &a));
        }
        let bad = Group::new(|a: &u8, b: &u8| a.wrapping_add(*b), 0, |a: &u8| *a);
        assert!(!inverse(&bad, &Exact, &3));
        assert!(inverse(&bad, &Exact, &128));
    }
}
