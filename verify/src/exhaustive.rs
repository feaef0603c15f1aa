//! Exhaustive law verification over a finite domain.
//!
//! Every operand tuple in `domainⁿ` is checked, for each declared law of
//! arity `n`, in lexicographic order of domain positions. The first failing
//! tuple is the counterexample; no shrinking is needed.

use std::fmt::Debug;

use algebra_core::{AlgebraicStructure, Equivalence, Instance};
use tracing::{debug, info, warn};

use crate::error::VerifyError;
use crate::report::{Counterexample, LawResult, VerificationReport};
use crate::runner::Verifier;

/// Upper bound on tuples enumerated for a single law.
pub const MAX_TUPLES: usize = 1 << 24;

/// Odometer over all `len`-tuples of a domain.
struct Tuples<'a, T> {
    domain: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> Tuples<'a, T> {
    fn new(domain: &'a [T], len: usize) -> Self {
        Self {
            domain,
            indices: vec![0; len],
            done: domain.is_empty(),
        }
    }
}

impl<T: Clone> Iterator for Tuples<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let tuple = self
            .indices
            .iter()
            .filter_map(|&i| self.domain.get(i).cloned())
            .collect();

        // advance, rightmost position fastest
        self.done = true;
        for slot in self.indices.iter_mut().rev() {
            *slot += 1;
            if *slot < self.domain.len() {
                self.done = false;
                break;
            }
            *slot = 0;
        }
        Some(tuple)
    }
}

impl Verifier {
    /// Checks every declared law on every instance against all operand
    /// tuples drawn from `domain`.
    ///
    /// `domain` should be the whole carrier (or a subset closed under the
    /// operations) for the result to be a proof rather than a sample.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::EmptyDomain`] for an empty domain and
    /// [`VerifyError::DomainTooLarge`] if some law would need more than
    /// [`MAX_TUPLES`] tuples.
    pub fn verify_exhaustive<S, E>(
        &self,
        instances: &[Instance<S>],
        domain: &[S::Value],
        eq: &E,
    ) -> Result<VerificationReport, VerifyError>
    where
        S: AlgebraicStructure,
        S::Value: Debug,
        E: Equivalence<S::Value> + Debug,
    {
        let mut report = VerificationReport::new();
        'instances: for instance in instances {
            let name = instance.name();
            if domain.is_empty() {
                return Err(VerifyError::EmptyDomain {
                    instance: name.to_string(),
                });
            }
            for &law in S::LAWS {
                let tuples = u32::try_from(law.arity())
                    .ok()
                    .and_then(|n| domain.len().checked_pow(n))
                    .unwrap_or(usize::MAX);
                if tuples > MAX_TUPLES {
                    return Err(VerifyError::DomainTooLarge {
                        instance: name.to_string(),
                        law: law.to_string(),
                        tuples,
                        limit: MAX_TUPLES,
                    });
                }

                let failing = Tuples::new(domain, law.arity())
                    .find(|operands| instance.structure().check(law, eq, operands) != Some(true));
                let result = match failing {
                    None => {
                        debug!(instance = name, law = %law, tuples, "law holds exhaustively");
                        LawResult::pass(name, S::KIND, law)
                    }
                    Some(operands) => {
                        let cx = Counterexample {
                            operands: operands.iter().map(|v| format!("{v:?}")).collect(),
                            equivalence: format!("{eq:?}"),
                            reason: format!("{law} does not hold"),
                        };
                        warn!(
                            instance = name,
                            law = %law,
                            operands = ?cx.operands,
                            "law violated"
                        );
                        LawResult::fail(name, S::KIND, law, cx)
                    }
                };
                let failed = result.is_failure();
                report.push(result);
                if failed && self.config().fail_fast {
                    break 'instances;
                }
            }
        }
        info!(
            kind = %S::KIND,
            domain = domain.len(),
            checked = report.results.len(),
            failed = report.failure_count(),
            "exhaustive verification finished"
        );
        Ok(report)
    }
}
