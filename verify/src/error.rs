//! Harness errors.
//!
//! Law violations are not errors; they are reported as failed
//! [`LawResult`](crate::LawResult)s. These cover requests the harness
//! cannot carry out.

use thiserror::Error;

/// Error returned for an invalid verification request.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The configuration asks for zero trials per law.
    #[error("verification needs at least one case per law")]
    NoCases,

    /// Exhaustive verification was given no values to enumerate.
    #[error("exhaustive verification of `{instance}` needs a non-empty domain")]
    EmptyDomain {
        /// Instance name.
        instance: String,
    },

    /// Exhaustive verification would enumerate too many operand tuples.
    #[error("exhaustive verification of `{instance}` would check {tuples} tuples for {law} (limit {limit})")]
    DomainTooLarge {
        /// Instance name.
        instance: String,
        /// Law name.
        law: String,
        /// Tuples required, saturated at `usize::MAX`.
        tuples: usize,
        /// The configured limit.
        limit: usize,
    },
}
