//! Pointwise lifting of structures to function spaces.
//!
//! For any input type `I`, functions `I -> O` inherit every law of a
//! structure over `O` when the operations are applied pointwise:
//! `(f·g)(x) = f(x)·g(x)`. Identity elements become constant arrows and
//! unary maps are composed after the function. Equality of arrows is
//! checked at a probe input with [`Pointwise`].

use alloc::sync::Arc;
use core::fmt;

use crate::equivalence::Equivalence;
use crate::kind::Kind;
use crate::operation::{Operation, UnaryOperation, Value};
use crate::structure::{Bimagma, Identity, Implicative, Invertible, Magma, Structure, Unital};

/// A shared function value `I -> O`.
///
/// Arrows are the carrier of lifted structures. An optional label is used
/// as the `Debug` rendering, so counterexamples stay readable.
pub struct Arrow<I, O> {
    f: Arc<dyn Fn(&I) -> O + Send + Sync>,
    label: Option<Arc<str>>,
}

impl<I, O> Arrow<I, O> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&I) -> O + Send + Sync + 'static) -> Self {
        Self {
            f: Arc::new(f),
            label: None,
        }
    }

    /// Wraps a closure with a display label.
    pub fn labelled(label: &str, f: impl Fn(&I) -> O + Send + Sync + 'static) -> Self {
        Self {
            f: Arc::new(f),
            label: Some(Arc::from(label)),
        }
    }

    /// Applies the arrow.
    #[inline]
    pub fn call(&self, x: &I) -> O {
        (self.f)(x)
    }

    /// The display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl<I: 'static, O: Clone + Send + Sync + 'static> Arrow<I, O> {
    /// The arrow that ignores its input.
    pub fn constant(value: O) -> Self {
        Self::new(move |_| value.clone())
    }
}

impl<I: 'static, O: 'static> Arrow<I, O> {
    /// `self` followed by `next`: `x ↦ next(self(x))`.
    pub fn then<P>(&self, next: &Arrow<O, P>) -> Arrow<I, P>
    where
        P: 'static,
    {
        let (f, g) = (Arc::clone(&self.f), Arc::clone(&next.f));
        Arrow::new(move |x| g(&f(x)))
    }
}

impl<T: Clone + 'static> Arrow<T, T> {
    /// `x ↦ x`.
    pub fn identity() -> Self {
        Self::labelled("id", T::clone)
    }
}

impl<I, O> Clone for Arrow<I, O> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            label: self.label.clone(),
        }
    }
}

impl<I, O> fmt::Debug for Arrow<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => f.write_str(label),
            None => f.write_str("<arrow>"),
        }
    }
}

/// Arrows compared by their outputs at a single probe input.
///
/// Property tests sample a fresh probe per trial, so a law that fails at
/// some input is eventually caught.
#[derive(Debug, Clone)]
pub struct Pointwise<I, E> {
    probe: I,
    inner: E,
}

impl<I, E> Pointwise<I, E> {
    /// Compares outputs at `probe` using `inner`.
    pub fn new(probe: I, inner: E) -> Self {
        Self { probe, inner }
    }

    /// The probe input.
    pub fn probe(&self) -> &I {
        &self.probe
    }
}

impl<I, O, E> Equivalence<Arrow<I, O>> for Pointwise<I, E>
where
    E: Equivalence<O>,
{
    fn equivalent(&self, a: &Arrow<I, O>, b: &Arrow<I, O>) -> bool {
        self.inner.equivalent(&a.call(&self.probe), &b.call(&self.probe))
    }
}

/// Structures that can be lifted pointwise to arrows from `I`.
pub trait Lift<I> {
    /// The same kind of structure over `Arrow<I, _>`.
    type Lifted;

    /// Lifts the structure.
    fn pointwise(&self) -> Self::Lifted;
}

fn lift_binary<I: Value, T: Value>(op: &Operation<T>) -> Operation<Arrow<I, T>> {
    let op = op.clone();
    Operation::new(move |f: &Arrow<I, T>, g: &Arrow<I, T>| {
        let (op, f, g) = (op.clone(), f.clone(), g.clone());
        Arrow::new(move |x| op.call(&f.call(x), &g.call(x)))
    })
}

fn lift_unary<I: Value, T: Value>(op: &UnaryOperation<T>) -> UnaryOperation<Arrow<I, T>> {
    let op = op.clone();
    UnaryOperation::new(move |f: &Arrow<I, T>| {
        let (op, f) = (op.clone(), f.clone());
        Arrow::new(move |x| op.call(&f.call(x)))
    })
}

impl<I: Value, T: Value, K: Kind> Lift<I> for Magma<T, K> {
    type Lifted = Magma<Arrow<I, T>, K>;

    fn pointwise(&self) -> Self::Lifted {
        Magma::raw(lift_binary(self.operation()))
    }
}

impl<I: Value, T: Value, K: Kind> Lift<I> for Unital<T, K> {
    type Lifted = Unital<Arrow<I, T>, K>;

    fn pointwise(&self) -> Self::Lifted {
        Unital::raw(
            lift_binary(self.operation()),
            Arrow::constant(self.empty().clone()),
        )
    }
}

impl<I: Value, T: Value, K: Kind> Lift<I> for Invertible<T, K> {
    type Lifted = Invertible<Arrow<I, T>, K>;

    fn pointwise(&self) -> Self::Lifted {
        Invertible::raw(
            lift_binary(self.operation()),
            Arrow::constant(self.empty().clone()),
            lift_unary(self.inverse_operation()),
        )
    }
}

impl<I, F, S, K> Lift<I> for Bimagma<F, S, K>
where
    F: Lift<I>,
    S: Lift<I>,
{
    type Lifted = Bimagma<F::Lifted, S::Lifted, K>;

    fn pointwise(&self) -> Self::Lifted {
        let (first, second) = self.parts();
        Bimagma::raw(first.pointwise(), second.pointwise())
    }
}

impl<I, F, S, K> Lift<I> for Implicative<F, S, K>
where
    I: Value,
    F: Structure + Lift<I>,
    F::Lifted: Structure<Value = Arrow<I, F::Value>>,
    S: Lift<I>,
{
    type Lifted = Implicative<F::Lifted, S::Lifted, K>;

    fn pointwise(&self) -> Self::Lifted {
        let (first, second) = self.parts();
        Implicative::raw(
            first.pointwise(),
            second.pointwise(),
            lift_binary(self.implication()),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;

    use super::*;
    use crate::equivalence::Exact;
    use crate::law::LawId;
    use crate::structure::{
        AbelianGroup, AlgebraicStructure, Bistructure, BooleanAlgebra, BoundedSemilattice,
        Implication, Inverse, Monoid, Semigroup,
    };

    fn sum() -> AbelianGroup<i64> {
        AbelianGroup::new(|a, b| a.wrapping_add(*b), 0, |a| a.wrapping_neg())
    }

    fn arrows() -> [Arrow<u8, i64>; 3] {
        [
            Arrow::labelled("double", |x: &u8| i64::from(*x) * 2),
            Arrow::labelled("square", |x: &u8| i64::from(*x) * i64::from(*x)),
            Arrow::constant(-5),
        ]
    }

    #[test]
    fn test_lifted_operation_is_pointwise() {
        let lifted: AbelianGroup<Arrow<u8, i64>> = sum().pointwise();
        let [f, g, _] = arrows();
        let h = lifted.apply(&f, &g);
        assert_eq!(h.call(&3), 6 + 9);
        assert_eq!(lifted.inverse(&f).call(&4), -8);
    }

    #[test]
    fn test_identity_lifts_to_constant_arrow() {
        let lifted: Monoid<Arrow<char, String>> =
            Monoid::new(|a: &String, b: &String| format!("{a}{b}"), String::new()).pointwise();
        assert_eq!(lifted.empty().call(&'x'), "");
        assert_eq!(lifted.empty().call(&'y'), "");
    }

    #[test]
    fn test_lifted_laws_hold_at_every_probe() {
        let lifted: AbelianGroup<Arrow<u8, i64>> = sum().pointwise();
        let [f, g, h] = arrows();
        for probe in [0_u8, 1, 17, 255] {
            let eq = Pointwise::new(probe, Exact);
            let triple = [f.clone(), g.clone(), h.clone()];
            assert_eq!(lifted.check(LawId::Associativity, &eq, &triple), Some(true));
            assert_eq!(lifted.check(LawId::Inverse, &eq, &triple[1..2]), Some(true));
            assert_eq!(lifted.check(LawId::Commutativity, &eq, &triple[..2]), Some(true));
        }
    }

    #[test]
    fn test_lifting_preserves_failures() {
        let sub: Semigroup<Arrow<u8, i64>> =
            Semigroup::new(|a: &i64, b: &i64| a.wrapping_sub(*b)).pointwise();
        let [f, g, h] = arrows();
        let eq = Pointwise::new(1_u8, Exact);
        assert_eq!(sub.check(LawId::Associativity, &eq, &[f, g, h]), Some(false));
    }

    #[test]
    fn test_lifted_boolean_algebra() {
        let b: BooleanAlgebra<bool> = BooleanAlgebra::new(
            BoundedSemilattice::new(|a, b| *a || *b, false),
            BoundedSemilattice::new(|a, b| *a && *b, true),
            |a, b| !*a || *b,
        );
        let lifted: BooleanAlgebra<Arrow<u8, bool>> = b.pointwise();
        let even = Arrow::labelled("even", |x: &u8| x % 2 == 0);
        let small = Arrow::labelled("small", |x: &u8| *x < 10);
        for probe in [0_u8, 3, 12, 13] {
            let eq = Pointwise::new(probe, Exact);
            assert!(lifted
                .violations(&eq, &[even.clone(), small.clone(), Arrow::constant(true)])
                .is_empty());
        }
        assert!(!lifted.complement(&even).call(&4));
        assert!(lifted.implies(&even, &even).call(&3));
        assert!(lifted.one().call(&200));
    }

    #[test]
    fn test_then_and_identity() {
        let inc = Arrow::labelled("inc", |x: &i32| x + 1);
        let dbl = Arrow::labelled("dbl", |x: &i32| x * 2);
        assert_eq!(inc.then(&dbl).call(&3), 8);
        assert_eq!(dbl.then(&inc).call(&3), 7);
        assert_eq!(Arrow::<i32, i32>::identity().then(&inc).call(&0), 1);
    }

    #[test]
    fn test_arrow_debug_uses_label() {
        assert_eq!(format!("{:?}", Arrow::labelled("inc", |x: &i32| x + 1)), "inc");
        assert_eq!(format!("{:?}", Arrow::<i32, i32>::new(|x| *x)), "<arrow>");
    }
}
