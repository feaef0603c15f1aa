//! Verification report types: per-law results and report aggregation.

use std::fmt;

use algebra_core::{LawId, StructureKind};

/// Operands on which a law failed, rendered with `Debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Counterexample {
    /// The operands, in law order (`a`, `b`, `c`).
    pub operands: Vec<String>,
    /// The equivalence the sides were compared with.
    pub equivalence: String,
    /// Why the check failed.
    pub reason: String,
}

impl fmt::Display for Counterexample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({})", self.reason, self.operands.join(", "))?;
        if !self.equivalence.is_empty() {
            write!(f, " under {}", self.equivalence)?;
        }
        Ok(())
    }
}

/// Outcome of checking one law on one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LawResult {
    /// Instance name.
    pub instance: String,
    /// The instance's kind.
    pub kind: StructureKind,
    /// The law checked.
    pub law: LawId,
    /// True if the law held on every trial.
    pub passed: bool,
    /// The (shrunk) failing case, when the law did not hold.
    pub counterexample: Option<Counterexample>,
}

impl LawResult {
    /// Creates a passing result.
    pub fn pass(instance: impl Into<String>, kind: StructureKind, law: LawId) -> Self {
        Self {
            instance: instance.into(),
            kind,
            law,
            passed: true,
            counterexample: None,
        }
    }

    /// Creates a failing result.
    pub fn fail(
        instance: impl Into<String>,
        kind: StructureKind,
        law: LawId,
        counterexample: Counterexample,
    ) -> Self {
        Self {
            instance: instance.into(),
            kind,
            law,
            passed: false,
            counterexample: Some(counterexample),
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        !self.passed
    }
}

impl fmt::Display for LawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{status}] {} ({}): {}", self.instance, self.kind, self.law)?;
        if let Some(cx) = &self.counterexample {
            write!(f, "\n       {cx}")?;
        }
        Ok(())
    }
}

/// Aggregated results of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VerificationReport {
    /// All individual results, in the order they were produced.
    pub results: Vec<LawResult>,
}

impl VerificationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: LawResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: VerificationReport) {
        self.results.extend(other.results);
    }

    /// Failed results.
    pub fn failures(&self) -> impl Iterator<Item = &LawResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// One-line tally, e.g. `"42 laws checked: 41 passed, 1 failed"`.
    pub fn summary(&self) -> String {
        let failed = self.failure_count();
        format!(
            "{} laws checked: {} passed, {} failed",
            self.results.len(),
            self.results.len() - failed,
            failed
        )
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{result}")?;
        }
        write!(f, "{}", self.summary())
    }
}
