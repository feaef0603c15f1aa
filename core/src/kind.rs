//! Structure kinds and the capability markers they carry.
//!
//! A kind is an uninhabited marker type. Capabilities are marker traits
//! implemented on kinds, so "a monoid is associative" is a trait impl and a
//! law requiring associativity is a trait bound.
//!
//! Identity and inverse are not markers here: they carry data and are
//! provided by the structure shape (see [`Identity`](crate::Identity) and
//! [`Inverse`](crate::Inverse)).

use core::fmt;

/// A structure kind.
pub trait Kind: Send + Sync + 'static {
    /// Runtime tag of this kind, used in reports.
    const ID: StructureKind;
}

/// The operation satisfies `(a·b)·c = a·(b·c)`.
pub trait Associative: Kind {}

/// The operation satisfies `a·b = b·a`.
pub trait Commutative: Kind {}

/// The operation satisfies `(a·b)·b = a·b`.
pub trait Idempotent: Kind {}

/// The second operation distributes over the first from the left.
pub trait Distributive: Kind {}

/// The second operation distributes over the first from the right.
pub trait RightDistributive: Kind {}

/// The first operation distributes over the second.
pub trait DualDistributive: Kind {}

/// The two operations absorb each other.
pub trait Absorptive: Kind {}

/// The identity of the first operation annihilates the second.
pub trait Annihilating: Kind {}

/// Every element joined with its pseudo-complement is the top element.
pub trait Complemented: Kind {}

/// `Self` may be viewed as the weaker kind `K`.
///
/// Reflexive, and transitively closed by declaration: every weaker kind
/// reachable from `Self` is listed directly.
pub trait Refines<K: Kind>: Kind {}

macro_rules! kinds {
    ($($(#[$meta:meta])* $name:ident = $label:literal [$($cap:ident),*];)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $name {}

            impl Kind for $name {
                const ID: StructureKind = StructureKind::$name;
            }

            $(impl $cap for $name {})*
        )+

        /// Runtime tag for every structure kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum StructureKind {
            $($(#[$meta])* $name,)+
        }

        impl StructureKind {
            /// Every kind, single-operation kinds first.
            pub const ALL: &'static [StructureKind] = &[$(StructureKind::$name),+];

            /// Human-readable name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(StructureKind::$name => $label,)+
                }
            }
        }
    };
}

kinds! {
    /// Associative operation.
    Semigroup = "semigroup" [Associative];
    /// Associative, commutative operation.
    CommutativeSemigroup = "commutative semigroup" [Associative, Commutative];
    /// Associative, idempotent operation.
    Band = "band" [Associative, Idempotent];
    /// Associative, commutative, idempotent operation.
    Semilattice = "semilattice" [Associative, Commutative, Idempotent];
    /// Semigroup with identity.
    Monoid = "monoid" [Associative];
    /// Commutative semigroup with identity.
    CommutativeMonoid = "commutative monoid" [Associative, Commutative];
    /// Band with identity.
    IdempotentMonoid = "idempotent monoid" [Associative, Idempotent];
    /// Semilattice with identity.
    BoundedSemilattice = "bounded semilattice" [Associative, Commutative, Idempotent];
    /// Monoid with inverses.
    Group = "group" [Associative];
    /// Commutative group.
    AbelianGroup = "abelian group" [Associative, Commutative];
    /// Ring without a multiplicative identity.
    Rng = "rng" [Distributive, RightDistributive, Annihilating];
    /// Ring without additive inverses.
    Semiring = "semiring" [Distributive, RightDistributive, Annihilating];
    /// Semiring with commutative multiplication.
    CommutativeSemiring = "commutative semiring" [Distributive, Annihilating];
    /// Ring with identity.
    Ring = "ring" [Distributive, RightDistributive, Annihilating];
    /// Ring with commutative multiplication.
    CommutativeRing = "commutative ring" [Distributive, Annihilating];
    /// Commutative ring whose nonzero elements have reciprocals.
    Field = "field" [Distributive, Annihilating];
    /// Two semilattices linked by absorption.
    Lattice = "lattice" [Absorptive];
    /// Lattice where each operation distributes over the other.
    DistributiveLattice = "distributive lattice" [Absorptive, Distributive, DualDistributive];
    /// Lattice with bottom and top.
    BoundedLattice = "bounded lattice" [Absorptive];
    /// Bounded lattice that is distributive.
    BoundedDistributiveLattice = "bounded distributive lattice" [Absorptive, Distributive, DualDistributive];
    /// Bounded distributive lattice with relative pseudo-complement.
    HeytingAlgebra = "heyting algebra" [Absorptive, Distributive, DualDistributive];
    /// Heyting algebra satisfying excluded middle.
    BooleanAlgebra = "boolean algebra" [Absorptive, Distributive, DualDistributive, Complemented];
}

impl StructureKind {
    /// Returns true for kinds built from two operations.
    #[must_use]
    pub const fn is_two_operation(self) -> bool {
        !matches!(
            self,
            StructureKind::Semigroup
                | StructureKind::CommutativeSemigroup
                | StructureKind::Band
                | StructureKind::Semilattice
                | StructureKind::Monoid
                | StructureKind::CommutativeMonoid
                | StructureKind::IdempotentMonoid
                | StructureKind::BoundedSemilattice
                | StructureKind::Group
                | StructureKind::AbelianGroup
        )
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! refines {
    ($($kind:ident => [$($weaker:ident),*];)+) => {
        $(
            impl Refines<$kind> for $kind {}
            $(impl Refines<$weaker> for $kind {})*
        )+
    };
}

refines! {
    Semigroup => [];
    CommutativeSemigroup => [Semigroup];
    Band => [Semigroup];
    Semilattice => [Semigroup, CommutativeSemigroup, Band];
    Monoid => [Semigroup];
    CommutativeMonoid => [Semigroup, CommutativeSemigroup, Monoid];
    IdempotentMonoid => [Semigroup, Band, Monoid];
    BoundedSemilattice => [
        Semigroup, CommutativeSemigroup, Band, Semilattice,
        Monoid, CommutativeMonoid, IdempotentMonoid
    ];
    Group => [Semigroup, Monoid];
    AbelianGroup => [Semigroup, CommutativeSemigroup, Monoid, CommutativeMonoid, Group];

    Rng => [];
    Semiring => [];
    CommutativeSemiring => [Semiring];
    Ring => [Rng, Semiring];
    CommutativeRing => [Rng, Semiring, CommutativeSemiring, Ring];
    Field => [Rng, Semiring, CommutativeSemiring, Ring, CommutativeRing];

    Lattice => [];
    DistributiveLattice => [Lattice];
    BoundedLattice => [Lattice];
    BoundedDistributiveLattice => [Lattice, DistributiveLattice, BoundedLattice];
    HeytingAlgebra => [Lattice, DistributiveLattice, BoundedLattice, BoundedDistributiveLattice];
    BooleanAlgebra => [
        Lattice, DistributiveLattice, BoundedLattice, BoundedDistributiveLattice, HeytingAlgebra
    ];
}
