//! Laws over a pair of operations.
//!
//! Projection laws run a single-operation law on one sub-structure. The
//! remaining laws relate the two operations.

use super::single;
use crate::equivalence::Equivalence;
use crate::kind::{
    Absorptive, Annihilating, Associative, Commutative, Complemented, Distributive,
    DualDistributive, Idempotent, RightDistributive,
};
use crate::structure::{Bistructure, Identity, Implication, Inverse, Structure};

/// Associativity of the first operation.
pub fn first_associativity<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
    c: &B::Value,
) -> bool
where
    B: Bistructure,
    <B::First as Structure>::Kind: Associative,
{
    single::associativity(s.first(), eq, a, b, c)
}

/// Associativity of the second operation.
pub fn second_associativity<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
    c: &B::Value,
) -> bool
where
    B: Bistructure,
    <B::Second as Structure>::Kind: Associative,
{
    single::associativity(s.second(), eq, a, b, c)
}

/// Commutativity of the first operation.
pub fn first_commutativity<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
) -> bool
where
    B: Bistructure,
    <B::First as Structure>::Kind: Commutative,
{
    single::commutativity(s.first(), eq, a, b)
}

/// Commutativity of the second operation.
pub fn second_commutativity<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
) -> bool
where
    B: Bistructure,
    <B::Second as Structure>::Kind: Commutative,
{
    single::commutativity(s.second(), eq, a, b)
}

/// Idempotency of the first operation.
pub fn first_idempotency<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
) -> bool
where
    B: Bistructure,
    <B::First as Structure>::Kind: Idempotent,
{
    single::idempotency(s.first(), eq, a, b)
}

/// Idempotency of the second operation.
pub fn second_idempotency<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
) -> bool
where
    B: Bistructure,
    <B::Second as Structure>::Kind: Idempotent,
{
    single::idempotency(s.second(), eq, a, b)
}

/// `a + 0 = a = 0 + a`
pub fn zero_identity<B>(s: &B, eq: &dyn Equivalence<B::Value>, a: &B::Value) -> bool
where
    B: Bistructure,
    B::First: Identity,
{
    single::identity(s.first(), eq, a)
}

/// `a · 1 = a = 1 · a`
pub fn one_identity<B>(s: &B, eq: &dyn Equivalence<B::Value>, a: &B::Value) -> bool
where
    B: Bistructure,
    B::Second: Identity,
{
    single::identity(s.second(), eq, a)
}

/// `a + (−a) = 0 = (−a) + a`
pub fn negation<B>(s: &B, eq: &dyn Equivalence<B::Value>, a: &B::Value) -> bool
where
    B: Bistructure,
    B::First: Inverse,
{
    single::inverse(s.first(), eq, a)
}

/// `a · a⁻¹ = 1 = a⁻¹ · a` for every `a` not equivalent to zero.
pub fn reciprocity<B>(s: &B, eq: &dyn Equivalence<B::Value>, a: &B::Value) -> bool
where
    B: Bistructure,
    B::First: Identity,
    B::Second: Inverse,
{
    eq.equivalent(a, s.zero()) || single::inverse(s.second(), eq, a)
}

/// `a·(b+c) = a·b + a·c`
pub fn distributivity<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
    c: &B::Value,
) -> bool
where
    B: Bistructure,
    B::Kind: Distributive,
{
    let left = s.times(a, &s.plus(b, c));
    let right = s.plus(&s.times(a, b), &s.times(a, c));
    eq.equivalent(&left, &right)
}

/// `(b+c)·a = b·a + c·a`
pub fn right_distributivity<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
    c: &B::Value,
) -> bool
where
    B: Bistructure,
    B::Kind: RightDistributive,
{
    let left = s.times(&s.plus(b, c), a);
    let right = s.plus(&s.times(b, a), &s.times(c, a));
    eq.equivalent(&left, &right)
}

/// `a+(b·c) = (a+b)·(a+c)`
pub fn dual_distributivity<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
    c: &B::Value,
) -> bool
where
    B: Bistructure,
    B::Kind: DualDistributive,
{
    let left = s.plus(a, &s.times(b, c));
    let right = s.times(&s.plus(a, b), &s.plus(a, c));
    eq.equivalent(&left, &right)
}

/// `a ∨ (a ∧ b) = a` and `a ∧ (a ∨ b) = a`
pub fn absorption<B>(s: &B, eq: &dyn Equivalence<B::Value>, a: &B::Value, b: &B::Value) -> bool
where
    B: Bistructure,
    B::Kind: Absorptive,
{
    eq.equivalent(&s.join(a, &s.meet(a, b)), a) && eq.equivalent(&s.meet(a, &s.join(a, b)), a)
}

/// `0·a = 0 = a·0`
pub fn annihilation<B>(s: &B, eq: &dyn Equivalence<B::Value>, a: &B::Value) -> bool
where
    B: Bistructure,
    B::Kind: Annihilating,
    B::First: Identity,
{
    let zero = s.zero();
    eq.equivalent(&s.times(zero, a), zero) && eq.equivalent(&s.times(a, zero), zero)
}

/// The Heyting implication axioms:
///
/// - `a → a = 1`
/// - `a ∧ (a → b) = a ∧ b`
/// - `b ∧ (a → b) = b`
/// - `a → (b ∧ c) = (a → b) ∧ (a → c)`
pub fn implication<B>(
    s: &B,
    eq: &dyn Equivalence<B::Value>,
    a: &B::Value,
    b: &B::Value,
    c: &B::Value,
) -> bool
where
    B: Implication,
    B::Second: Identity,
{
    let ab = s.implies(a, b);
    eq.equivalent(&s.implies(a, a), s.one())
        && eq.equivalent(&s.meet(a, &ab), &s.meet(a, b))
        && eq.equivalent(&s.meet(b, &ab), b)
        && eq.equivalent(&s.implies(a, &s.meet(b, c)), &s.meet(&ab, &s.implies(a, c)))
}

/// `a ∨ (a → 0) = 1`
pub fn excluded_middle<B>(s: &B, eq: &dyn Equivalence<B::Value>, a: &B::Value) -> bool
where
    B: Implication,
    B::Kind: Complemented,
    B::First: Identity,
    B::Second: Identity,
{
    eq.equivalent(&s.join(a, &s.complement(a)), s.one())
}
