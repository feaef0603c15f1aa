//! Property-based law verification.

use std::fmt::Debug;

use algebra_core::{AlgebraicStructure, Equivalence, Instance, LawId};
use proptest::collection::vec;
use proptest::strategy::Strategy;
use proptest::test_runner::{TestCaseError, TestError};
use tracing::{debug, info, warn};

use crate::config::VerifyConfig;
use crate::error::VerifyError;
use crate::report::{Counterexample, LawResult, VerificationReport};

/// Runs law checks and collects their results.
#[derive(Debug, Clone)]
pub struct Verifier {
    config: VerifyConfig,
}

impl Verifier {
    /// Creates a verifier.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::NoCases`] if the configuration asks for zero
    /// trials.
    pub fn new(config: VerifyConfig) -> Result<Self, VerifyError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Checks one law on one instance.
    ///
    /// Each trial draws `law.arity()` operands from `values` and one
    /// equivalence from `equivalences`. On failure proptest shrinks the
    /// operands and the smallest failing case is recorded. A law the
    /// instance's kind does not declare is reported as failed without
    /// running any trial.
    pub fn verify_law<S, V, E>(
        &self,
        instance: &Instance<S>,
        law: LawId,
        values: &V,
        equivalences: &E,
    ) -> LawResult
    where
        S: AlgebraicStructure,
        S::Value: Debug,
        V: Strategy<Value = S::Value>,
        E: Strategy,
        E::Value: Equivalence<S::Value>,
    {
        let name = instance.name();
        if !S::LAWS.contains(&law) {
            return LawResult::fail(
                name,
                S::KIND,
                law,
                Counterexample {
                    operands: Vec::new(),
                    equivalence: String::new(),
                    reason: format!("{law} is not declared by {}", S::KIND),
                },
            );
        }

        let structure = instance.structure();
        let mut runner = self.config.runner();
        let outcome = runner.run(
            &(vec(values, law.arity()), equivalences),
            |(operands, eq)| match structure.check(law, &eq, &operands) {
                Some(true) => Ok(()),
                Some(false) => Err(TestCaseError::fail(format!("{law} does not hold"))),
                None => Err(TestCaseError::fail(format!(
                    "{law} expects {} operands, got {}",
                    law.arity(),
                    operands.len()
                ))),
            },
        );

        let result = match outcome {
            Ok(()) => LawResult::pass(name, S::KIND, law),
            Err(TestError::Fail(reason, (operands, eq))) => {
                let cx = Counterexample {
                    operands: operands.iter().map(|v| format!("{v:?}")).collect(),
                    equivalence: format!("{eq:?}"),
                    reason: reason.message().to_string(),
                };
                LawResult::fail(name, S::KIND, law, cx)
            }
            Err(TestError::Abort(reason)) => LawResult::fail(
                name,
                S::KIND,
                law,
                Counterexample {
                    operands: Vec::new(),
                    equivalence: String::new(),
                    reason: format!("aborted: {}", reason.message()),
                },
            ),
        };

        match &result.counterexample {
            None => debug!(instance = name, kind = %S::KIND, law = %law, "law holds"),
            Some(cx) => warn!(
                instance = name,
                kind = %S::KIND,
                law = %law,
                operands = ?cx.operands,
                equivalence = %cx.equivalence,
                reason = %cx.reason,
                "law violated"
            ),
        }
        result
    }

    /// Checks every declared law on every instance.
    ///
    /// Results are ordered by instance, then by the kind's law order. With
    /// `fail_fast`, the run stops after the first failing pair.
    pub fn verify<S, V, E>(
        &self,
        instances: &[Instance<S>],
        values: &V,
        equivalences: &E,
    ) -> VerificationReport
    where
        S: AlgebraicStructure,
        S::Value: Debug,
        V: Strategy<Value = S::Value>,
        E: Strategy,
        E::Value: Equivalence<S::Value>,
    {
        let mut report = VerificationReport::new();
        'instances: for instance in instances {
            for &law in S::LAWS {
                let result = self.verify_law(instance, law, values, equivalences);
                let failed = result.is_failure();
                report.push(result);
                if failed && self.config.fail_fast {
                    break 'instances;
                }
            }
        }
        info!(
            kind = %S::KIND,
            instances = instances.len(),
            checked = report.results.len(),
            failed = report.failure_count(),
            "verification finished"
        );
        report
    }
}
