//! Structure shapes and the traits that expose their operations.
//!
//! Three single-operation shapes ([`Magma`], [`Unital`], [`Invertible`])
//! hold an operation with optional identity and inverse. Two-operation
//! shapes ([`Bimagma`], [`Implicative`]) pair two of them. Every shape is
//! parameterized by a kind; only the shape/kind pairings listed in a law
//! registry can be constructed.

mod double;
mod single;

pub use double::{
    Bimagma, BooleanAlgebra, BoundedDistributiveLattice, BoundedLattice, CommutativeRing,
    CommutativeSemiring, DistributiveLattice, Field, HeytingAlgebra, Implicative, Lattice, Ring,
    Rng, Semiring,
};
pub use single::{
    AbelianGroup, Band, BoundedSemilattice, CommutativeMonoid, CommutativeSemigroup, Group,
    IdempotentMonoid, Invertible, Magma, Monoid, Semigroup, Semilattice, Unital,
};

use alloc::vec::Vec;

use crate::equivalence::Equivalence;
use crate::kind::{Kind, StructureKind};
use crate::law::LawId;
use crate::operation::Value;

/// A single closed binary operation of some kind.
pub trait Structure: Send + Sync {
    /// Carrier type.
    type Value: Value;
    /// Kind marker.
    type Kind: Kind;

    /// Applies the operation.
    fn apply(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// A structure with an identity element.
pub trait Identity: Structure {
    /// The identity element (`empty`).
    fn empty(&self) -> &Self::Value;
}

/// A structure with an identity element and inverses.
pub trait Inverse: Identity {
    /// The inverse of `a`.
    fn inverse(&self, a: &Self::Value) -> Self::Value;
}

/// A pair of operations over the same carrier.
///
/// The first operation is the additive one (`plus`, `join`), the second
/// the multiplicative one (`times`, `meet`).
pub trait Bistructure: Send + Sync {
    /// Carrier type.
    type Value: Value;
    /// Kind marker.
    type Kind: Kind;
    /// The first sub-structure.
    type First: Structure<Value = Self::Value>;
    /// The second sub-structure.
    type Second: Structure<Value = Self::Value>;

    /// The first sub-structure.
    fn first(&self) -> &Self::First;

    /// The second sub-structure.
    fn second(&self) -> &Self::Second;

    /// Applies the first operation.
    fn plus(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        self.first().apply(a, b)
    }

    /// Applies the second operation.
    fn times(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        self.second().apply(a, b)
    }

    /// Lattice name for [`plus`](Self::plus).
    fn join(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        self.plus(a, b)
    }

    /// Lattice name for [`times`](Self::times).
    fn meet(&self, a: &Self::Value, b: &Self::Value) -> Self::Value {
        self.times(a, b)
    }

    /// Identity of the first operation.
    fn zero(&self) -> &Self::Value
    where
        Self::First: Identity,
    {
        self.first().empty()
    }

    /// Identity of the second operation.
    fn one(&self) -> &Self::Value
    where
        Self::Second: Identity,
    {
        self.second().empty()
    }

    /// Additive inverse.
    fn negate(&self, a: &Self::Value) -> Self::Value
    where
        Self::First: Inverse,
    {
        self.first().inverse(a)
    }

    /// Multiplicative inverse.
    fn reciprocal(&self, a: &Self::Value) -> Self::Value
    where
        Self::Second: Inverse,
    {
        self.second().inverse(a)
    }
}

/// A two-operation structure with relative pseudo-complement `a → b`.
pub trait Implication: Bistructure {
    /// `a → b`.
    fn implies(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

    /// `a → 0`; the complement in a Boolean algebra.
    fn complement(&self, a: &Self::Value) -> Self::Value
    where
        Self::First: Identity,
    {
        self.implies(a, self.zero())
    }
}

/// A structure kind with a registered law list.
///
/// Implemented only for shape/kind pairings declared in the registry, which
/// is what makes a law/kind mismatch a compile error.
pub trait AlgebraicStructure: Send + Sync {
    /// Carrier type.
    type Value: Value;

    /// Kind tag.
    const KIND: StructureKind;

    /// Laws this kind must satisfy, in reporting order.
    const LAWS: &'static [LawId];

    /// Evaluates `law` on `operands`.
    ///
    /// Returns `None` if the kind does not declare `law`, or if the number
    /// of operands differs from [`LawId::arity`].
    fn check(
        &self,
        law: LawId,
        eq: &dyn Equivalence<Self::Value>,
        operands: &[Self::Value],
    ) -> Option<bool>;

    /// Returns true only if `law` is declared and holds on `operands`.
    fn holds(&self, law: LawId, eq: &dyn Equivalence<Self::Value>, operands: &[Self::Value]) -> bool {
        self.check(law, eq, operands) == Some(true)
    }

    /// Every declared law violated by a prefix of `operands`.
    ///
    /// Each law reads as many leading operands as its arity; laws needing
    /// more operands than supplied are skipped.
    fn violations(
        &self,
        eq: &dyn Equivalence<Self::Value>,
        operands: &[Self::Value],
    ) -> Vec<LawId> {
        Self::LAWS
            .iter()
            .copied()
            .filter(|law| {
                operands
                    .get(..law.arity())
                    .is_some_and(|prefix| self.check(*law, eq, prefix) == Some(false))
            })
            .collect()
    }
}
