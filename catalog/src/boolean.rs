//! Booleans.

use algebra_core::{
    AbelianGroup, BooleanAlgebra, BoundedSemilattice, CommutativeMonoid, CommutativeRing,
    Instance,
};

/// Every boolean, for exhaustive checks.
pub const DOMAIN: [bool; 2] = [false, true];

/// `(bool, ∨, false)`.
pub fn or() -> Instance<BoundedSemilattice<bool>> {
    Instance::new("or", BoundedSemilattice::new(|a: &bool, b: &bool| *a || *b, false))
}

/// `(bool, ∧, true)`.
pub fn and() -> Instance<BoundedSemilattice<bool>> {
    Instance::new("and", BoundedSemilattice::new(|a: &bool, b: &bool| *a && *b, true))
}

/// `(bool, ⊕, false)`; every element is its own inverse.
pub fn xor() -> Instance<AbelianGroup<bool>> {
    Instance::new("xor", AbelianGroup::new(|a: &bool, b: &bool| a ^ b, false, |a: &bool| *a))
}

/// The two-element Boolean algebra with `a → b = ¬a ∨ b`.
pub fn bool_algebra() -> Instance<BooleanAlgebra<bool>> {
    Instance::new(
        "bool",
        BooleanAlgebra::new(
            or().into_structure(),
            and().into_structure(),
            |a: &bool, b: &bool| !*a || *b,
        ),
    )
}

/// GF(2) as the ring `(bool, ⊕, ∧)`.
pub fn boolean_ring() -> Instance<CommutativeRing<bool>> {
    let times = and().widen::<CommutativeMonoid<bool>>().into_structure();
    Instance::new("boolean ring", CommutativeRing::new(xor().into_structure(), times))
}
