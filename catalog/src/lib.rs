//! A catalog of named structures and the suite that verifies them.
//!
//! Every constructor returns an [`Instance`](algebra_core::Instance) whose
//! name is what reports print. Modules that need their own operand
//! generators export them next to the instances (e.g.
//! [`numeric::reals`], [`collection::byte_sets`]).
//!
//! | Module | Carrier | Instances |
//! |--------|---------|-----------|
//! | [`numeric`] | `i64`, `u64`, `f64` | sum, product, max, min, integers, naturals, real |
//! | [`boolean`] | `bool` | or, and, xor, bool, boolean ring |
//! | [`collection`] | `String`, `Vec`, `BTreeSet<u8>` | concat, append, union, intersection, powerset |
//! | [`optional`] | `Option<T>`, `T` | first some, last some, first, last |
//! | [`function`] | `Arrow<i32, i32>` | endo |
//! | [`tropical`] | `Option<u64>` | min plus, max plus |
//! | [`modular`] | `u8` | z256, gf5 |
//!
//! [`Suite::run`] checks all of them, together with pointwise lifts,
//! widened views and exhaustive runs over the finite carriers.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod boolean;
pub mod collection;
pub mod function;
pub mod modular;
pub mod numeric;
pub mod optional;
pub mod suite;
pub mod tropical;

pub use suite::Suite;
