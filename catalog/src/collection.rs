//! Strings, vectors and sets of bytes.

use std::collections::BTreeSet;

use algebra_core::{BooleanAlgebra, BoundedSemilattice, Instance, Monoid};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

/// A set of bytes. The universe is all 256 of them.
pub type ByteSet = BTreeSet<u8>;

/// `(String, ++, "")`.
pub fn concat() -> Instance<Monoid<String>> {
    Instance::new(
        "concat",
        Monoid::new(|a: &String, b: &String| format!("{a}{b}"), String::new()),
    )
}

/// `(Vec<i32>, ++, [])`.
pub fn append() -> Instance<Monoid<Vec<i32>>> {
    Instance::new(
        "append",
        Monoid::new(
            |a: &Vec<i32>, b: &Vec<i32>| a.iter().chain(b).copied().collect(),
            Vec::new(),
        ),
    )
}

/// Every byte.
pub fn universe() -> ByteSet {
    (0..=u8::MAX).collect()
}

/// `(ByteSet, ∪, ∅)`.
pub fn union() -> Instance<BoundedSemilattice<ByteSet>> {
    Instance::new(
        "union",
        BoundedSemilattice::new(|a: &ByteSet, b: &ByteSet| a | b, ByteSet::new()),
    )
}

/// `(ByteSet, ∩, universe)`.
pub fn intersection() -> Instance<BoundedSemilattice<ByteSet>> {
    Instance::new(
        "intersection",
        BoundedSemilattice::new(|a: &ByteSet, b: &ByteSet| a & b, universe()),
    )
}

/// The powerset of the bytes with `a → b = (universe ∖ a) ∪ b`.
pub fn powerset() -> Instance<BooleanAlgebra<ByteSet>> {
    let all = universe();
    Instance::new(
        "powerset",
        BooleanAlgebra::new(
            union().into_structure(),
            intersection().into_structure(),
            move |a: &ByteSet, b: &ByteSet| &(&all - a) | b,
        ),
    )
}

/// Short strings over a small alphabet.
pub fn strings() -> impl Strategy<Value = String> {
    "[a-d]{0,6}"
}

/// Short vectors.
pub fn vectors() -> impl Strategy<Value = Vec<i32>> {
    vec(any::<i32>(), 0..6)
}

/// Byte sets drawn from a narrow range, so that random sets overlap.
pub fn byte_sets() -> impl Strategy<Value = ByteSet> {
    prop_oneof![
        8 => btree_set(0_u8..16, 0..8),
        1 => Just(ByteSet::new()),
        1 => Just(universe()),
    ]
}
