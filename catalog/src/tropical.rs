//! Tropical semirings over `Option<u64>`.
//!
//! `None` is the infinite element: `+∞` for min-plus, `-∞` for max-plus.
//! It is the identity of the choice operation and absorbs addition.
//! Finite addition saturates at `u64::MAX`.

use algebra_core::{CommutativeMonoid, CommutativeSemiring, Instance};
use proptest::prelude::*;

/// A tropical number.
pub type Tropical = Option<u64>;

fn plus(a: &Tropical, b: &Tropical) -> Tropical {
    Some(a.as_ref()?.saturating_add(*b.as_ref()?))
}

fn smaller(a: &Tropical, b: &Tropical) -> Tropical {
    match (a, b) {
        (None, x) | (x, None) => *x,
        (Some(x), Some(y)) => Some(*x.min(y)),
    }
}

/// `(min, +)` with `None = +∞`.
pub fn min_plus() -> Instance<CommutativeSemiring<Tropical>> {
    Instance::new(
        "min plus",
        CommutativeSemiring::new(
            CommutativeMonoid::new(smaller, None),
            CommutativeMonoid::new(plus, Some(0)),
        ),
    )
}

/// `(max, +)` with `None = -∞`.
pub fn max_plus() -> Instance<CommutativeSemiring<Tropical>> {
    Instance::new(
        "max plus",
        CommutativeSemiring::new(
            CommutativeMonoid::new(|a: &Tropical, b: &Tropical| *a.max(b), None),
            CommutativeMonoid::new(plus, Some(0)),
        ),
    )
}

/// Finite values across the whole range, large ones included so that
/// saturation is exercised, plus the infinite element.
pub fn tropicals() -> impl Strategy<Value = Tropical> {
    prop_oneof![
        4 => (0_u64..1000).prop_map(Some),
        2 => any::<u64>().prop_map(Some),
        1 => Just(None),
    ]
}
