//! Reinterpreting a structure as a weaker kind.
//!
//! Widening never changes behavior: it re-wraps the same operations under a
//! weaker kind (and, for shapes, may drop the identity or inverse). Only the
//! refinements declared with [`Refines`] are available, and only towards
//! registered kinds.

use crate::kind::{Kind, Refines};
use crate::operation::Value;
use crate::structure::{
    AlgebraicStructure, Bimagma, Identity, Implicative, Invertible, Magma, Structure, Unital,
};

/// Conversion of a structure into the weaker structure `Target`.
///
/// # Example
///
/// ```
/// use algebra_core::{AbelianGroup, AlgebraicStructure, Field, Ring, Widen};
///
/// let q: Field<f64> = Field::new(
///     AbelianGroup::new(|a: &f64, b: &f64| a + b, 0.0, |a: &f64| -a),
///     AbelianGroup::new(|a: &f64, b: &f64| a * b, 1.0, |a: &f64| 1.0 / a),
/// );
/// let ring: Ring<f64> = q.widen();
/// assert_eq!(Ring::<f64>::LAWS.len(), 9);
/// # let _ = ring;
/// ```
pub trait Widen<Target> {
    /// Re-wraps `self` as `Target`.
    fn widen(&self) -> Target;
}

impl<T, K, W> Widen<Magma<T, W>> for Magma<T, K>
where
    T: Value,
    K: Refines<W>,
    W: Kind,
    Magma<T, W>: AlgebraicStructure,
{
    fn widen(&self) -> Magma<T, W> {
        Magma::raw(self.operation().clone())
    }
}

impl<T, K, W> Widen<Magma<T, W>> for Unital<T, K>
where
    T: Value,
    K: Refines<W>,
    W: Kind,
    Magma<T, W>: AlgebraicStructure,
{
    fn widen(&self) -> Magma<T, W> {
        Magma::raw(self.operation().clone())
    }
}

impl<T, K, W> Widen<Unital<T, W>> for Unital<T, K>
where
    T: Value,
    K: Refines<W>,
    W: Kind,
    Unital<T, W>: AlgebraicStructure,
{
    fn widen(&self) -> Unital<T, W> {
        Unital::raw(self.operation().clone(), self.empty().clone())
    }
}

impl<T, K, W> Widen<Magma<T, W>> for Invertible<T, K>
where
    T: Value,
    K: Refines<W>,
    W: Kind,
    Magma<T, W>: AlgebraicStructure,
{
    fn widen(&self) -> Magma<T, W> {
        Magma::raw(self.operation().clone())
    }
}

impl<T, K, W> Widen<Unital<T, W>> for Invertible<T, K>
where
    T: Value,
    K: Refines<W>,
    W: Kind,
    Unital<T, W>: AlgebraicStructure,
{
    fn widen(&self) -> Unital<T, W> {
        Unital::raw(self.operation().clone(), self.empty().clone())
    }
}

impl<T, K, W> Widen<Invertible<T, W>> for Invertible<T, K>
where
    T: Value,
    K: Refines<W>,
    W: Kind,
    Invertible<T, W>: AlgebraicStructure,
{
    fn widen(&self) -> Invertible<T, W> {
        Invertible::raw(
            self.operation().clone(),
            self.empty().clone(),
            self.inverse_operation().clone(),
        )
    }
}

impl<F, S, K, F2, S2, K2> Widen<Bimagma<F2, S2, K2>> for Bimagma<F, S, K>
where
    F: Widen<F2>,
    S: Widen<S2>,
    K: Refines<K2>,
    K2: Kind,
    Bimagma<F2, S2, K2>: AlgebraicStructure,
{
    fn widen(&self) -> Bimagma<F2, S2, K2> {
        let (first, second) = self.parts();
        Bimagma::raw(first.widen(), second.widen())
    }
}

impl<F, S, K, F2, S2, K2> Widen<Bimagma<F2, S2, K2>> for Implicative<F, S, K>
where
    F: Structure + Widen<F2>,
    S: Widen<S2>,
    K: Refines<K2>,
    K2: Kind,
    Bimagma<F2, S2, K2>: AlgebraicStructure,
{
    fn widen(&self) -> Bimagma<F2, S2, K2> {
        let (first, second) = self.parts();
        Bimagma::raw(first.widen(), second.widen())
    }
}

impl<F, S, K, F2, S2, K2> Widen<Implicative<F2, S2, K2>> for Implicative<F, S, K>
where
    F: Structure + Widen<F2>,
    F2: Structure<Value = F::Value>,
    S: Widen<S2>,
    K: Refines<K2>,
    K2: Kind,
    Implicative<F2, S2, K2>: AlgebraicStructure,
{
    fn widen(&self) -> Implicative<F2, S2, K2> {
        let (first, second) = self.parts();
        Implicative::raw(first.widen(), second.widen(), self.implication().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::Exact;
    use crate::kind::StructureKind;
    use crate::law::LawId;
    use crate::structure::{
        AbelianGroup, Bistructure, BooleanAlgebra, BoundedLattice, BoundedSemilattice,
        CommutativeMonoid, CommutativeRing, Field, HeytingAlgebra, Implication, Inverse, Lattice,
        Monoid, Ring, Rng, Semigroup, Semilattice,
    };

    fn gf5() -> Field<u8> {
        Field::new(
            AbelianGroup::new(|a: &u8, b: &u8| (a + b) % 5, 0, |a: &u8| (5 - a) % 5),
            AbelianGroup::new(|a: &u8, b: &u8| (a * b) % 5, 1, |a: &u8| [0, 1, 3, 2, 4][usize::from(*a)]),
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
    fn test_single_operation_widening() {
        let sum = AbelianGroup::new(|a: &i32, b: &i32| a.wrapping_add(*b), 0, |a: &i32| a.wrapping_neg());
        let monoid: Monoid<i32> = sum.widen();
        let semigroup: Semigroup<i32> = sum.widen();
        let commutative: CommutativeMonoid<i32> = sum.widen();
        assert_eq!(monoid.apply(&2, &3), 5);
        assert_eq!(*monoid.empty(), 0);
        assert_eq!(semigroup.apply(&-1, &1), 0);
        assert_eq!(commutative.check(LawId::Commutativity, &Exact, &[4, 9]), Some(true));
        let again: AbelianGroup<i32> = sum.widen();
        assert_eq!(again.inverse(&7), -7);
    }

    #[test]
    fn test_field_to_ring_family() {
        let f = gf5();
        let ring: Ring<u8> = f.widen();
        let rng: Rng<u8> = f.widen();
        let commutative: CommutativeRing<u8> = f.widen();
        assert_eq!(Ring::<u8>::KIND, StructureKind::Ring);
        for a in 0..5 {
            for b in 0..5 {
                for c in 0..5 {
                    let ops = [a, b, c];
                    assert!(ring.violations(&Exact, &ops).is_empty());
                    assert!(rng.violations(&Exact, &ops).is_empty());
                    assert!(commutative.violations(&Exact, &ops).is_empty());
                }
            }
        }
        assert_eq!(ring.times(&3, &2), 1);
    }

    #[test]
    fn test_boolean_algebra_to_lattices() {
        let b = booleans();
        let bounded: BoundedLattice<bool> = b.widen();
        let heyting: HeytingAlgebra<bool> = b.widen();
        let lattice: Lattice<bool> = b.widen();
        assert!(!*bounded.zero());
        assert!(*bounded.one());
        assert!(heyting.implies(&false, &true));
        assert_eq!(lattice.check(LawId::Absorption, &Exact, &[true, false]), Some(true));
        assert_eq!(lattice.check(LawId::ZeroIdentity, &Exact, &[true]), None);
    }

    #[test]
    fn test_widened_semilattice_pair() {
        let b = booleans();
        let lattice: Lattice<bool> = b.widen();
        let join: Semilattice<bool> = lattice.first().widen();
        assert!(join.apply(&true, &false));
    }
}
