//! Endofunctions under composition.

use algebra_core::{Arrow, Instance, Monoid};

/// `(i32 → i32, ∘, id)` with `f · g = f ∘ g`.
pub fn endo() -> Instance<Monoid<Arrow<i32, i32>>> {
    Instance::new(
        "endo",
        Monoid::new(
            |f: &Arrow<i32, i32>, g: &Arrow<i32, i32>| g.then(f),
            Arrow::identity(),
        ),
    )
}
