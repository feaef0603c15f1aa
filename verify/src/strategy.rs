//! Strategies for equivalences and for function-valued operands.

use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use algebra_core::{Approximate, Arrow, Exact, Pointwise};
use proptest::arbitrary::{any, Arbitrary};
use proptest::collection::vec;
use proptest::strategy::{Just, Strategy};

/// Always [`Exact`].
pub fn exact() -> Just<Exact> {
    Just(Exact)
}

/// Always the default [`Approximate`] tolerance.
pub fn approximate() -> Just<Approximate> {
    Just(Approximate::default())
}

/// [`Pointwise`] equivalences at an arbitrary probe input, comparing
/// outputs with `inner`.
pub fn probe<I, E>(inner: E) -> impl Strategy<Value = Pointwise<I, E>>
where
    I: Arbitrary,
    E: Clone + Debug,
{
    probe_from(any::<I>(), inner)
}

/// [`Pointwise`] equivalences at probe inputs drawn from `inputs`.
pub fn probe_from<I, E>(
    inputs: impl Strategy<Value = I>,
    inner: E,
) -> impl Strategy<Value = Pointwise<I, E>>
where
    I: Debug,
    E: Clone + Debug,
{
    inputs.prop_map(move |p| Pointwise::new(p, inner.clone()))
}

/// Random arrows `I -> O`.
///
/// Each arrow hashes its input together with a random seed and looks the
/// result up in a random table of 1 to 7 outputs, so it is deterministic
/// but otherwise arbitrary. The label shows the seed and the table.
pub fn arrow<I, O>(outputs: impl Strategy<Value = O>) -> impl Strategy<Value = Arrow<I, O>>
where
    I: Hash + 'static,
    O: Clone + Debug + Send + Sync + 'static,
{
    (any::<u64>(), vec(outputs, 1..8)).prop_map(|(seed, table)| {
        let label = format!("table#{seed:016x}{table:?}");
        Arrow::labelled(&label, move |x: &I| {
            let mut hasher = DefaultHasher::new();
            seed.hash(&mut hasher);
            x.hash(&mut hasher);
            let len = u64::try_from(table.len()).unwrap_or(u64::MAX);
            let slot = usize::try_from(hasher.finish() % len).unwrap_or_default();
            table[slot].clone()
        })
    })
}
