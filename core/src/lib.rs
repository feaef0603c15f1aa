//! Algebraic structures as composable, law-carrying Rust types.
//!
//! A structure is an operation (or a pair of operations) over a value type
//! together with a *kind*: a zero-sized marker that records which
//! capabilities the operation claims. The kind decides which laws apply.
//!
//! # Hierarchy
//!
//! | Kind | Shape | Capabilities |
//! |------|-------|--------------|
//! | Semigroup | [`Magma`] | associative |
//! | CommutativeSemigroup | [`Magma`] | associative, commutative |
//! | Band | [`Magma`] | associative, idempotent |
//! | Semilattice | [`Magma`] | associative, commutative, idempotent |
//! | Monoid | [`Unital`] | associative, identity |
//! | CommutativeMonoid | [`Unital`] | + commutative |
//! | IdempotentMonoid | [`Unital`] | + idempotent |
//! | BoundedSemilattice | [`Unital`] | + commutative, idempotent |
//! | Group | [`Invertible`] | associative, identity, inverse |
//! | AbelianGroup | [`Invertible`] | + commutative |
//!
//! Two-operation kinds ([`Bimagma`], [`Implicative`]) pair two of the above:
//! rings (`Rng` through `Field`) and lattices (`Lattice` through
//! `BooleanAlgebra`).
//!
//! # Laws
//!
//! Every law is a generic function in [`laws`], written once against the
//! weakest capability bound that makes it meaningful. Each registered kind
//! lists its laws in [`AlgebraicStructure::LAWS`] and dispatches
//! [`AlgebraicStructure::check`] to those functions. A law whose bounds the
//! kind does not satisfy cannot be listed: the registry would not compile.
//!
//! ```
//! use algebra_core::{AbelianGroup, AlgebraicStructure, Exact, LawId};
//!
//! let sum = AbelianGroup::new(
//!     |a: &i64, b: &i64| a.wrapping_add(*b),
//!     0,
//!     |a: &i64| a.wrapping_neg(),
//! );
//! assert_eq!(sum.check(LawId::Associativity, &Exact, &[1, 2, 3]), Some(true));
//! assert_eq!(sum.check(LawId::Inverse, &Exact, &[7]), Some(true));
//!
//! // Absorption is a lattice law; an abelian group does not declare it.
//! assert_eq!(sum.check(LawId::Absorption, &Exact, &[1, 2]), None);
//! ```
//!
//! # Lifting and widening
//!
//! [`Lift::pointwise`] turns a structure over `O` into the same kind of
//! structure over functions [`Arrow<I, O>`]. [`Widen::widen`] reinterprets a
//! structure as a weaker kind, e.g. a field as a ring.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod equivalence;
pub mod instance;
pub mod kind;
pub mod law;
pub mod laws;
pub mod lift;
pub mod operation;
pub mod structure;
pub mod widen;

pub use equivalence::{Approximate, Equivalence, Exact};
pub use instance::Instance;
pub use kind::{Kind, Refines, StructureKind};
pub use law::LawId;
pub use lift::{Arrow, Lift, Pointwise};
pub use operation::{Operation, UnaryOperation, Value};
pub use structure::{
    AbelianGroup, AlgebraicStructure, Band, Bimagma, Bistructure, BooleanAlgebra,
    BoundedDistributiveLattice, BoundedLattice, BoundedSemilattice, CommutativeMonoid,
    CommutativeRing, CommutativeSemigroup, CommutativeSemiring, DistributiveLattice, Field,
    Group, HeytingAlgebra, IdempotentMonoid, Identity, Implication, Implicative, Inverse,
    Invertible, Lattice, Magma, Monoid, Ring, Rng, Semigroup, Semilattice, Semiring, Structure,
    Unital,
};
pub use widen::Widen;

/// Glob-importable set of the traits needed to call structure methods.
pub mod prelude {
    pub use crate::equivalence::Equivalence;
    pub use crate::lift::Lift;
    pub use crate::structure::{
        AlgebraicStructure, Bistructure, Identity, Implication, Inverse, Structure,
    };
    pub use crate::widen::Widen;
}
