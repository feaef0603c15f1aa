//! Harness configuration.

use proptest::test_runner::{Config as ProptestConfig, TestRng, TestRunner};

use crate::error::VerifyError;

/// Settings shared by every law check of a [`Verifier`](crate::Verifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Successful trials required per (instance, law) pair.
    pub cases: u32,
    /// Upper bound on shrinking steps after a failure.
    pub max_shrink_iters: u32,
    /// Seed every run from a fixed RNG, making reports reproducible.
    pub deterministic: bool,
    /// Stop at the first failing (instance, law) pair.
    pub fail_fast: bool,
}

impl Default for VerifyConfig {
    /// Takes `cases` and `max_shrink_iters` from proptest's defaults, so
    /// `PROPTEST_CASES` and `PROPTEST_MAX_SHRINK_ITERS` are honored.
    fn default() -> Self {
        let base = ProptestConfig::default();
        Self {
            cases: base.cases,
            max_shrink_iters: base.max_shrink_iters,
            deterministic: false,
            fail_fast: false,
        }
    }
}

impl VerifyConfig {
    /// Sets the number of trials per law.
    #[must_use]
    pub fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Sets the shrinking budget.
    #[must_use]
    pub fn with_max_shrink_iters(mut self, iters: u32) -> Self {
        self.max_shrink_iters = iters;
        self
    }

    /// Enables or disables the fixed-seed RNG.
    #[must_use]
    pub fn deterministic(mut self, on: bool) -> Self {
        self.deterministic = on;
        self
    }

    /// Enables or disables stopping at the first failure.
    #[must_use]
    pub fn fail_fast(mut self, on: bool) -> Self {
        self.fail_fast = on;
        self
    }

    /// Checks the settings.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::NoCases`] if `cases` is zero.
    pub fn validate(&self) -> Result<(), VerifyError> {
        if self.cases == 0 {
            return Err(VerifyError::NoCases);
        }
        Ok(())
    }

    /// A fresh proptest runner for one (instance, law) pair.
    pub(crate) fn runner(&self) -> TestRunner {
        let mut config = ProptestConfig::with_cases(self.cases);
        config.max_shrink_iters = self.max_shrink_iters;
        // No regression files: the runner is not tied to a source file.
        config.failure_persistence = None;
        if self.deterministic {
            let rng = TestRng::deterministic_rng(config.rng_algorithm);
            TestRunner::new_with_rng(config, rng)
        } else {
            TestRunner::new(config)
        }
    }
}
