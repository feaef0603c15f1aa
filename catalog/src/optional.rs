//! Left- and right-biased choice.
//!
//! On `Option<T>` the choice skips `None`, which makes `None` the identity.
//! On plain values there is no identity and the structures are bands.

use algebra_core::{Band, IdempotentMonoid, Instance, Value};

/// The first `Some`, or `None`.
pub fn first_some<T: Value>() -> Instance<IdempotentMonoid<Option<T>>> {
    Instance::new(
        "first some",
        IdempotentMonoid::new(|a: &Option<T>, b: &Option<T>| a.clone().or_else(|| b.clone()), None),
    )
}

/// The last `Some`, or `None`.
pub fn last_some<T: Value>() -> Instance<IdempotentMonoid<Option<T>>> {
    Instance::new(
        "last some",
        IdempotentMonoid::new(|a: &Option<T>, b: &Option<T>| b.clone().or_else(|| a.clone()), None),
    )
}

/// `a · b = a`.
pub fn first<T: Value>() -> Instance<Band<T>> {
    Instance::new("first", Band::new(|a: &T, _: &T| a.clone()))
}

/// `a · b = b`.
pub fn last<T: Value>() -> Instance<Band<T>> {
    Instance::new("last", Band::new(|_: &T, b: &T| b.clone()))
}
