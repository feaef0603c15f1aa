//! Single-operation shapes and the kinds registered for them.

use core::fmt;
use core::marker::PhantomData;

use super::{AlgebraicStructure, Identity, Inverse, Structure};
use crate::kind::{self, Kind};
use crate::laws::single as laws;
use crate::operation::{Operation, UnaryOperation, Value};

/// An operation with no further data.
pub struct Magma<T, K> {
    op: Operation<T>,
    kind: PhantomData<fn() -> K>,
}

/// An operation with an identity element.
pub struct Unital<T, K> {
    op: Operation<T>,
    empty: T,
    kind: PhantomData<fn() -> K>,
}

/// An operation with an identity element and inverses.
pub struct Invertible<T, K> {
    op: Operation<T>,
    empty: T,
    inverse: UnaryOperation<T>,
    kind: PhantomData<fn() -> K>,
}

/// Associative operation.
pub type Semigroup<T> = Magma<T, kind::Semigroup>;
/// Associative, commutative operation.
pub type CommutativeSemigroup<T> = Magma<T, kind::CommutativeSemigroup>;
/// Associative, idempotent operation.
pub type Band<T> = Magma<T, kind::Band>;
/// Associative, commutative, idempotent operation.
pub type Semilattice<T> = Magma<T, kind::Semilattice>;
/// Semigroup with identity.
pub type Monoid<T> = Unital<T, kind::Monoid>;
/// Commutative monoid.
pub type CommutativeMonoid<T> = Unital<T, kind::CommutativeMonoid>;
/// Idempotent monoid.
pub type IdempotentMonoid<T> = Unital<T, kind::IdempotentMonoid>;
/// Semilattice with identity.
pub type BoundedSemilattice<T> = Unital<T, kind::BoundedSemilattice>;
/// Monoid with inverses.
pub type Group<T> = Invertible<T, kind::Group>;
/// Commutative group.
pub type AbelianGroup<T> = Invertible<T, kind::AbelianGroup>;

impl<T: Value, K: Kind> Magma<T, K>
where
    Magma<T, K>: AlgebraicStructure,
{
    /// Creates the structure from a closure.
    pub fn new(op: impl Fn(&T, &T) -> T + Send + Sync + 'static) -> Self {
        Self::raw(Operation::new(op))
    }

    /// Creates the structure from an existing operation.
    pub fn from_operation(op: Operation<T>) -> Self {
        Self::raw(op)
    }
}

impl<T, K> Magma<T, K> {
    pub(crate) fn raw(op: Operation<T>) -> Self {
        Self {
            op,
            kind: PhantomData,
        }
    }

    /// The underlying operation.
    pub fn operation(&self) -> &Operation<T> {
        &self.op
    }
}

impl<T: Value, K: Kind> Unital<T, K>
where
    Unital<T, K>: AlgebraicStructure,
{
    /// Creates the structure from a closure and its identity element.
    pub fn new(op: impl Fn(&T, &T) -> T + Send + Sync + 'static, empty: T) -> Self {
        Self::raw(Operation::new(op), empty)
    }

    /// Creates the structure from an existing operation.
    pub fn from_operation(op: Operation<T>, empty: T) -> Self {
        Self::raw(op, empty)
    }
}

impl<T, K> Unital<T, K> {
    pub(crate) fn raw(op: Operation<T>, empty: T) -> Self {
        Self {
            op,
            empty,
            kind: PhantomData,
        }
    }

    /// The underlying operation.
    pub fn operation(&self) -> &Operation<T> {
        &self.op
    }
}

impl<T: Value, K: Kind> Invertible<T, K>
where
    Invertible<T, K>: AlgebraicStructure,
{
    /// Creates the structure from a closure, its identity and its inverse.
    pub fn new(
        op: impl Fn(&T, &T) -> T + Send + Sync + 'static,
        empty: T,
        inverse: impl Fn(&T) -> T + Send + Sync + 'static,
    ) -> Self {
        Self::raw(Operation::new(op), empty, UnaryOperation::new(inverse))
    }

    /// Creates the structure from existing operations.
    pub fn from_operations(op: Operation<T>, empty: T, inverse: UnaryOperation<T>) -> Self {
        Self::raw(op, empty, inverse)
    }
}

impl<T, K> Invertible<T, K> {
    pub(crate) fn raw(op: Operation<T>, empty: T, inverse: UnaryOperation<T>) -> Self {
        Self {
            op,
            empty,
            inverse,
            kind: PhantomData,
        }
    }

    /// The underlying operation.
    pub fn operation(&self) -> &Operation<T> {
        &self.op
    }

    /// The underlying inverse map.
    pub fn inverse_operation(&self) -> &UnaryOperation<T> {
        &self.inverse
    }
}

impl<T: Value, K: Kind> Structure for Magma<T, K> {
    type Value = T;
    type Kind = K;

    fn apply(&self, a: &T, b: &T) -> T {
        self.op.call(a, b)
    }
}

impl<T: Value, K: Kind> Structure for Unital<T, K> {
    type Value = T;
    type Kind = K;

    fn apply(&self, a: &T, b: &T) -> T {
        self.op.call(a, b)
    }
}

impl<T: Value, K: Kind> Identity for Unital<T, K> {
    fn empty(&self) -> &T {
        &self.empty
    }
}

impl<T: Value, K: Kind> Structure for Invertible<T, K> {
    type Value = T;
    type Kind = K;

    fn apply(&self, a: &T, b: &T) -> T {
        self.op.call(a, b)
    }
}

impl<T: Value, K: Kind> Identity for Invertible<T, K> {
    fn empty(&self) -> &T {
        &self.empty
    }
}

impl<T: Value, K: Kind> Inverse for Invertible<T, K> {
    fn inverse(&self, a: &T) -> T {
        self.inverse.call(a)
    }
}

impl<T, K> Clone for Magma<T, K> {
    fn clone(&self) -> Self {
        Self::raw(self.op.clone())
    }
}

impl<T: Clone, K> Clone for Unital<T, K> {
    fn clone(&self) -> Self {
        Self::raw(self.op.clone(), self.empty.clone())
    }
}

impl<T: Clone, K> Clone for Invertible<T, K> {
    fn clone(&self) -> Self {
        Self::raw(self.op.clone(), self.empty.clone(), self.inverse.clone())
    }
}

impl<T, K: Kind> fmt::Debug for Magma<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Magma").field("kind", &K::ID).finish_non_exhaustive()
    }
}

impl<T: fmt::Debug, K: Kind> fmt::Debug for Unital<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unital")
            .field("kind", &K::ID)
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Debug, K: Kind> fmt::Debug for Invertible<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invertible")
            .field("kind", &K::ID)
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

law_registry! {
    Semigroup for Magma<T, kind::Semigroup> {
        Associativity(a, b, c) => laws::associativity;
    }
    CommutativeSemigroup for Magma<T, kind::CommutativeSemigroup> {
        Associativity(a, b, c) => laws::associativity;
        Commutativity(a, b) => laws::commutativity;
    }
    Band for Magma<T, kind::Band> {
        Associativity(a, b, c) => laws::associativity;
        Idempotency(a, b) => laws::idempotency;
    }
    Semilattice for Magma<T, kind::Semilattice> {
        Associativity(a, b, c) => laws::associativity;
        Commutativity(a, b) => laws::commutativity;
        Idempotency(a, b) => laws::idempotency;
    }
    Monoid for Unital<T, kind::Monoid> {
        Associativity(a, b, c) => laws::associativity;
        Identity(a) => laws::identity;
    }
    CommutativeMonoid for Unital<T, kind::CommutativeMonoid> {
        Associativity(a, b, c) => laws::associativity;
        Commutativity(a, b) => laws::commutativity;
        Identity(a) => laws::identity;
    }
    IdempotentMonoid for Unital<T, kind::IdempotentMonoid> {
        Associativity(a, b, c) => laws::associativity;
        Idempotency(a, b) => laws::idempotency;
        Identity(a) => laws::identity;
    }
    BoundedSemilattice for Unital<T, kind::BoundedSemilattice> {
        Associativity(a, b, c) => laws::associativity;
        Commutativity(a, b) => laws::commutativity;
        Idempotency(a, b) => laws::idempotency;
        Identity(a) => laws::identity;
    }
    Group for Invertible<T, kind::Group> {
        Associativity(a, b, c) => laws::associativity;
        Identity(a) => laws::identity;
        Inverse(a) => laws::inverse;
    }
    AbelianGroup for Invertible<T, kind::AbelianGroup> {
        Associativity(a, b, c) => laws::associativity;
        Commutativity(a, b) => laws::commutativity;
        Identity(a) => laws::identity;
        Inverse(a) => laws::inverse;
    }
}
