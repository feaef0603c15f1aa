//! Law verification for `algebra-core` structures.
//!
//! The harness checks every law a structure's kind declares against
//! generated operands and reports one [`LawResult`] per (instance, law)
//! pair.
//!
//! | Mode | Entry point | Operands |
//! |------|-------------|----------|
//! | Property-based | [`Verifier::verify`] | `proptest` strategy, shrunk on failure |
//! | Exhaustive | [`Verifier::verify_exhaustive`] | every tuple over a finite domain |
//!
//! Equivalences are generated alongside the operands, so lifted structures
//! can be compared at a fresh probe input per trial (see [`strategy::probe`]).
//!
//! # Entry Point
//!
//! ```
//! use algebra_core::{CommutativeMonoid, Instance};
//! use algebra_verify::{strategy, Verifier, VerifyConfig};
//! use proptest::prelude::*;
//!
//! let verifier = Verifier::new(VerifyConfig::default().with_cases(64))?;
//! let sum = Instance::new(
//!     "natural sum",
//!     CommutativeMonoid::new(|a: &u64, b: &u64| a.wrapping_add(*b), 0),
//! );
//! let report = verifier.verify(&[sum], &any::<u64>(), &strategy::exact());
//! assert!(report.all_passed());
//! assert_eq!(report.results.len(), 3);
//! # Ok::<(), algebra_verify::VerifyError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod exhaustive;
pub mod report;
pub mod runner;
pub mod strategy;

pub use config::VerifyConfig;
pub use error::VerifyError;
pub use report::{Counterexample, LawResult, VerificationReport};
pub use runner::Verifier;
