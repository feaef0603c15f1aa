//! Two-operation shapes and the ring-like and lattice-like kinds.

use core::fmt;
use core::marker::PhantomData;

use super::single::{AbelianGroup, BoundedSemilattice, CommutativeMonoid, Monoid, Semigroup, Semilattice};
use super::{AlgebraicStructure, Bistructure, Implication, Structure};
use crate::kind::{self, Kind};
use crate::laws::double as laws;
use crate::operation::Operation;

/// Two structures over the same carrier.
pub struct Bimagma<F, S, K> {
    first: F,
    second: S,
    kind: PhantomData<fn() -> K>,
}

/// Two structures over the same carrier plus an implication `a → b`.
pub struct Implicative<F: Structure, S, K> {
    first: F,
    second: S,
    implies: Operation<F::Value>,
    kind: PhantomData<fn() -> K>,
}

/// Ring without multiplicative identity.
pub type Rng<T> = Bimagma<AbelianGroup<T>, Semigroup<T>, kind::Rng>;
/// Ring without additive inverses.
pub type Semiring<T> = Bimagma<CommutativeMonoid<T>, Monoid<T>, kind::Semiring>;
/// Semiring with commutative multiplication.
pub type CommutativeSemiring<T> =
    Bimagma<CommutativeMonoid<T>, CommutativeMonoid<T>, kind::CommutativeSemiring>;
/// Ring with identity.
pub type Ring<T> = Bimagma<AbelianGroup<T>, Monoid<T>, kind::Ring>;
/// Ring with commutative multiplication.
pub type CommutativeRing<T> = Bimagma<AbelianGroup<T>, CommutativeMonoid<T>, kind::CommutativeRing>;
/// Commutative ring whose nonzero elements have reciprocals.
pub type Field<T> = Bimagma<AbelianGroup<T>, AbelianGroup<T>, kind::Field>;
/// Join and meet semilattices linked by absorption.
pub type Lattice<T> = Bimagma<Semilattice<T>, Semilattice<T>, kind::Lattice>;
/// Lattice whose join and meet distribute over each other.
pub type DistributiveLattice<T> = Bimagma<Semilattice<T>, Semilattice<T>, kind::DistributiveLattice>;
/// Lattice with bottom (join identity) and top (meet identity).
pub type BoundedLattice<T> =
    Bimagma<BoundedSemilattice<T>, BoundedSemilattice<T>, kind::BoundedLattice>;
/// Bounded lattice that is distributive.
pub type BoundedDistributiveLattice<T> =
    Bimagma<BoundedSemilattice<T>, BoundedSemilattice<T>, kind::BoundedDistributiveLattice>;
/// Bounded distributive lattice with relative pseudo-complement.
pub type HeytingAlgebra<T> =
    Implicative<BoundedSemilattice<T>, BoundedSemilattice<T>, kind::HeytingAlgebra>;
/// Heyting algebra satisfying excluded middle.
pub type BooleanAlgebra<T> =
    Implicative<BoundedSemilattice<T>, BoundedSemilattice<T>, kind::BooleanAlgebra>;

impl<F, S, K> Bimagma<F, S, K>
where
    Bimagma<F, S, K>: AlgebraicStructure,
{
    /// Pairs the additive (join) and multiplicative (meet) structures.
    pub fn new(first: F, second: S) -> Self {
        Self::raw(first, second)
    }
}

impl<F, S, K> Bimagma<F, S, K> {
    pub(crate) fn raw(first: F, second: S) -> Self {
        Self {
            first,
            second,
            kind: PhantomData,
        }
    }

    pub(crate) fn parts(&self) -> (&F, &S) {
        (&self.first, &self.second)
    }
}

impl<F: Structure, S, K> Implicative<F, S, K>
where
    Implicative<F, S, K>: AlgebraicStructure,
{
    /// Pairs join and meet with the implication operation.
    pub fn new(
        first: F,
        second: S,
        implies: impl Fn(&F::Value, &F::Value) -> F::Value + Send + Sync + 'static,
    ) -> Self {
        Self::raw(first, second, Operation::new(implies))
    }
}

impl<F: Structure, S, K> Implicative<F, S, K> {
    pub(crate) fn raw(first: F, second: S, implies: Operation<F::Value>) -> Self {
        Self {
            first,
            second,
            implies,
            kind: PhantomData,
        }
    }

    /// The implication as an operation.
    pub fn implication(&self) -> &Operation<F::Value> {
        &self.implies
    }

    pub(crate) fn parts(&self) -> (&F, &S) {
        (&self.first, &self.second)
    }
}

impl<F, S, K> Bistructure for Bimagma<F, S, K>
where
    F: Structure,
    S: Structure<Value = F::Value>,
    K: Kind,
{
    type Value = F::Value;
    type Kind = K;
    type First = F;
    type Second = S;

    fn first(&self) -> &F {
        &self.first
    }

    fn second(&self) -> &S {
        &self.second
    }
}

impl<F, S, K> Bistructure for Implicative<F, S, K>
where
    F: Structure,
    S: Structure<Value = F::Value>,
    K: Kind,
{
    type Value = F::Value;
    type Kind = K;
    type First = F;
    type Second = S;

    fn first(&self) -> &F {
        &self.first
    }

    fn second(&self) -> &S {
        &self.second
    }
}

impl<F, S, K> Implication for Implicative<F, S, K>
where
    F: Structure,
    S: Structure<Value = F::Value>,
    K: Kind,
{
    fn implies(&self, a: &F::Value, b: &F::Value) -> F::Value {
        self.implies.call(a, b)
    }
}

impl<F: Clone, S: Clone, K> Clone for Bimagma<F, S, K> {
    fn clone(&self) -> Self {
        Self::raw(self.first.clone(), self.second.clone())
    }
}

impl<F: Structure + Clone, S: Clone, K> Clone for Implicative<F, S, K> {
    fn clone(&self) -> Self {
        Self::raw(self.first.clone(), self.second.clone(), self.implies.clone())
    }
}

impl<F: fmt::Debug, S: fmt::Debug, K: Kind> fmt::Debug for Bimagma<F, S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bimagma")
            .field("kind", &K::ID)
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<F: Structure + fmt::Debug, S: fmt::Debug, K: Kind> fmt::Debug for Implicative<F, S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implicative")
            .field("kind", &K::ID)
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}

law_registry! {
    Rng for Bimagma<AbelianGroup<T>, Semigroup<T>, kind::Rng> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        ZeroIdentity(a) => laws::zero_identity;
        Negation(a) => laws::negation;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        Distributivity(a, b, c) => laws::distributivity;
        RightDistributivity(a, b, c) => laws::right_distributivity;
        Annihilation(a) => laws::annihilation;
    }
    Semiring for Bimagma<CommutativeMonoid<T>, Monoid<T>, kind::Semiring> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        ZeroIdentity(a) => laws::zero_identity;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        OneIdentity(a) => laws::one_identity;
        Distributivity(a, b, c) => laws::distributivity;
        RightDistributivity(a, b, c) => laws::right_distributivity;
        Annihilation(a) => laws::annihilation;
    }
    CommutativeSemiring for Bimagma<CommutativeMonoid<T>, CommutativeMonoid<T>, kind::CommutativeSemiring> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        ZeroIdentity(a) => laws::zero_identity;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        OneIdentity(a) => laws::one_identity;
        Distributivity(a, b, c) => laws::distributivity;
        Annihilation(a) => laws::annihilation;
    }
    Ring for Bimagma<AbelianGroup<T>, Monoid<T>, kind::Ring> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        ZeroIdentity(a) => laws::zero_identity;
        Negation(a) => laws::negation;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        OneIdentity(a) => laws::one_identity;
        Distributivity(a, b, c) => laws::distributivity;
        RightDistributivity(a, b, c) => laws::right_distributivity;
        Annihilation(a) => laws::annihilation;
    }
    CommutativeRing for Bimagma<AbelianGroup<T>, CommutativeMonoid<T>, kind::CommutativeRing> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        ZeroIdentity(a) => laws::zero_identity;
        Negation(a) => laws::negation;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        OneIdentity(a) => laws::one_identity;
        Distributivity(a, b, c) => laws::distributivity;
        Annihilation(a) => laws::annihilation;
    }
    Field for Bimagma<AbelianGroup<T>, AbelianGroup<T>, kind::Field> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        ZeroIdentity(a) => laws::zero_identity;
        Negation(a) => laws::negation;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        OneIdentity(a) => laws::one_identity;
        Reciprocity(a) => laws::reciprocity;
        Distributivity(a, b, c) => laws::distributivity;
        Annihilation(a) => laws::annihilation;
    }
    Lattice for Bimagma<Semilattice<T>, Semilattice<T>, kind::Lattice> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        FirstIdempotency(a, b) => laws::first_idempotency;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        SecondIdempotency(a, b) => laws::second_idempotency;
        Absorption(a, b) => laws::absorption;
    }
    DistributiveLattice for Bimagma<Semilattice<T>, Semilattice<T>, kind::DistributiveLattice> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        FirstIdempotency(a, b) => laws::first_idempotency;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        SecondIdempotency(a, b) => laws::second_idempotency;
        Absorption(a, b) => laws::absorption;
        Distributivity(a, b, c) => laws::distributivity;
        DualDistributivity(a, b, c) => laws::dual_distributivity;
    }
    BoundedLattice for Bimagma<BoundedSemilattice<T>, BoundedSemilattice<T>, kind::BoundedLattice> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        FirstIdempotency(a, b) => laws::first_idempotency;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        SecondIdempotency(a, b) => laws::second_idempotency;
        Absorption(a, b) => laws::absorption;
        ZeroIdentity(a) => laws::zero_identity;
        OneIdentity(a) => laws::one_identity;
    }
    BoundedDistributiveLattice for Bimagma<BoundedSemilattice<T>, BoundedSemilattice<T>, kind::BoundedDistributiveLattice> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        FirstIdempotency(a, b) => laws::first_idempotency;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        SecondIdempotency(a, b) => laws::second_idempotency;
        Absorption(a, b) => laws::absorption;
        Distributivity(a, b, c) => laws::distributivity;
        DualDistributivity(a, b, c) => laws::dual_distributivity;
        ZeroIdentity(a) => laws::zero_identity;
        OneIdentity(a) => laws::one_identity;
    }
    HeytingAlgebra for Implicative<BoundedSemilattice<T>, BoundedSemilattice<T>, kind::HeytingAlgebra> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        FirstIdempotency(a, b) => laws::first_idempotency;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        SecondIdempotency(a, b) => laws::second_idempotency;
        Absorption(a, b) => laws::absorption;
        Distributivity(a, b, c) => laws::distributivity;
        DualDistributivity(a, b, c) => laws::dual_distributivity;
        ZeroIdentity(a) => laws::zero_identity;
        OneIdentity(a) => laws::one_identity;
        Implication(a, b, c) => laws::implication;
    }
    BooleanAlgebra for Implicative<BoundedSemilattice<T>, BoundedSemilattice<T>, kind::BooleanAlgebra> {
        FirstAssociativity(a, b, c) => laws::first_associativity;
        FirstCommutativity(a, b) => laws::first_commutativity;
        FirstIdempotency(a, b) => laws::first_idempotency;
        SecondAssociativity(a, b, c) => laws::second_associativity;
        SecondCommutativity(a, b) => laws::second_commutativity;
        SecondIdempotency(a, b) => laws::second_idempotency;
        Absorption(a, b) => laws::absorption;
        Distributivity(a, b, c) => laws::distributivity;
        DualDistributivity(a, b, c) => laws::dual_distributivity;
        ZeroIdentity(a) => laws::zero_identity;
        OneIdentity(a) => laws::one_identity;
        Implication(a, b, c) => laws::implication;
        ExcludedMiddle(a) => laws::excluded_middle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::Exact;
    use crate::kind::StructureKind;
    use crate::law::LawId;
    use crate::structure::Identity;

    fn integers() -> CommutativeRing<i64> {
        CommutativeRing::new(
            AbelianGroup::new(|a, b| a.wrapping_add(*b), 0, |a| a.wrapping_neg()),
            CommutativeMonoid::new(|a, b| a.wrapping_mul(*b), 1),
        )
    }

    fn booleans() -> BooleanAlgebra<bool> {
        BooleanAlgebra::new(
            BoundedSemilattice::new(|a, b| *a || *b, false),
            BoundedSemilattice::new(|a, b| *a && *b, true),
            |a, b| !*a || *b,
        )
    }

    #[test]
    fn test_named_accessors() {
        let z = integers();
        assert_eq!(z.plus(&2, &3), 5);
        assert_eq!(z.times(&2, &3), 6);
        assert_eq!(*z.zero(), 0);
        assert_eq!(*z.one(), 1);
        assert_eq!(z.negate(&9), -9);
        assert_eq!(z.first().empty(), &0);
    }

    #[test]
    fn test_boolean_accessors() {
        let b = booleans();
        assert!(b.join(&true, &false));
        assert!(!b.meet(&true, &false));
        assert!(b.implies(&false, &false));
        assert!(!b.complement(&true));
        assert!(b.complement(&false));
    }

    #[test]
    fn test_law_counts() {
        assert_eq!(Rng::<i8>::LAWS.len(), 8);
        assert_eq!(Semiring::<i8>::LAWS.len(), 8);
        assert_eq!(CommutativeSemiring::<i8>::LAWS.len(), 8);
        assert_eq!(Ring::<i8>::LAWS.len(), 9);
        assert_eq!(CommutativeRing::<i8>::LAWS.len(), 9);
        assert_eq!(Field::<i8>::LAWS.len(), 10);
        assert_eq!(Lattice::<i8>::LAWS.len(), 7);
        assert_eq!(DistributiveLattice::<i8>::LAWS.len(), 9);
        assert_eq!(BoundedLattice::<i8>::LAWS.len(), 9);
        assert_eq!(BoundedDistributiveLattice::<i8>::LAWS.len(), 11);
        assert_eq!(HeytingAlgebra::<i8>::LAWS.len(), 12);
        assert_eq!(BooleanAlgebra::<i8>::LAWS.len(), 13);
        assert_eq!(BooleanAlgebra::<i8>::KIND, StructureKind::BooleanAlgebra);
    }

    #[test]
    fn test_commutative_semiring_omits_right_distributivity() {
        assert!(!CommutativeSemiring::<u8>::LAWS.contains(&LawId::RightDistributivity));
        assert!(Semiring::<u8>::LAWS.contains(&LawId::RightDistributivity));
    }

    #[test]
    fn test_integers_satisfy_ring_laws() {
        let z = integers();
        let samples = [-7_i64, 0, 1, 3, i64::MAX];
        for a in samples {
            for b in samples {
                for c in samples {
                    let v = z.violations(&Exact, &[a, b, c]);
                    assert!(v.is_empty(), "{v:?} at ({a}, {b}, {c})");
                }
            }
        }
    }

    #[test]
    fn test_boolean_algebra_exhaustive() {
        let b = booleans();
        for x in [false, true] {
            for y in [false, true] {
                for z in [false, true] {
                    assert!(b.violations(&Exact, &[x, y, z]).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_heyting_rejects_wrong_implication() {
        let h = HeytingAlgebra::new(
            BoundedSemilattice::new(|a: &bool, b: &bool| *a || *b, false),
            BoundedSemilattice::new(|a: &bool, b: &bool| *a && *b, true),
            |a: &bool, b: &bool| *a && *b,
        );
        assert_eq!(h.check(LawId::Implication, &Exact, &[false, false, false]), Some(false));
    }

    #[test]
    fn test_max_min_is_not_absorptive_with_plus() {
        let bad = Lattice::new(
            Semilattice::new(|a: &u8, b: &u8| *a.max(b)),
            Semilattice::new(|a: &u8, b: &u8| a.saturating_add(*b)),
        );
        assert_eq!(bad.check(LawId::Absorption, &Exact, &[1, 2]), Some(false));
    }
}
