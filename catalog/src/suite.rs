//! The catalog verification suite.
//!
//! Runs every catalog instance with its generators, then pointwise lifts
//! over `Arrow<u8, _>`, widened views, and exhaustive checks of the finite
//! carriers. Instances can be selected by a name substring.

use std::fmt::Debug;

use algebra_core::{
    AlgebraicStructure, Approximate, BoundedDistributiveLattice, CommutativeRing, Equivalence, Exact,
    HeytingAlgebra, Instance,
};
use algebra_verify::{strategy, VerificationReport, Verifier, VerifyError};
use proptest::option;
use proptest::prelude::*;
use tracing::info;

use crate::{boolean, collection, function, modular, numeric, optional, tropical};

/// Which instances to verify.
#[derive(Debug, Clone, Default)]
pub struct Suite {
    filter: Option<String>,
}

impl Suite {
    /// A suite over the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the suite to instances whose name contains `filter`.
    ///
    /// Lifted and widened instances carry their base name, so `"gf5"`
    /// selects `gf5`, `gf5 (pointwise)` and the exhaustive GF(5) run.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Verifies the selected instances.
    ///
    /// With `fail_fast` set on the verifier, the suite stops at the first
    /// group containing a failure.
    ///
    /// # Errors
    ///
    /// Propagates [`VerifyError`] from the exhaustive runs, which only
    /// occurs if a finite domain is empty or too large.
    pub fn run(&self, verifier: &Verifier) -> Result<VerificationReport, VerifyError> {
        let mut run = Run {
            verifier,
            filter: self.filter.as_deref(),
            report: VerificationReport::new(),
        };
        let exact = strategy::exact;

        // =====================================================================
        // Numbers
        // =====================================================================

        run.sampled(vec![numeric::sum()], any::<i64>(), exact());
        run.sampled(vec![numeric::product()], any::<i64>(), exact());
        run.sampled(vec![numeric::max(), numeric::min()], any::<i64>(), exact());
        run.sampled(vec![numeric::integers()], any::<i64>(), exact());
        run.sampled(
            vec![numeric::natural_sum(), numeric::natural_product()],
            any::<u64>(),
            exact(),
        );
        run.sampled(vec![numeric::naturals()], any::<u64>(), exact());
        run.sampled(
            vec![numeric::real_sum(), numeric::real_product()],
            numeric::reals(),
            strategy::approximate(),
        );
        run.sampled(vec![numeric::real()], numeric::reals(), strategy::approximate());
        run.sampled(vec![modular::z256()], any::<u8>(), exact());
        run.sampled(vec![modular::gf5()], modular::residues(), exact());
        run.sampled(
            vec![tropical::min_plus(), tropical::max_plus()],
            tropical::tropicals(),
            exact(),
        );

        // =====================================================================
        // Booleans and collections
        // =====================================================================

        run.sampled(vec![boolean::or(), boolean::and()], any::<bool>(), exact());
        run.sampled(vec![boolean::xor()], any::<bool>(), exact());
        run.sampled(vec![boolean::bool_algebra()], any::<bool>(), exact());
        run.sampled(vec![boolean::boolean_ring()], any::<bool>(), exact());
        run.sampled(vec![collection::concat()], collection::strings(), exact());
        run.sampled(vec![collection::append()], collection::vectors(), exact());
        run.sampled(
            vec![collection::union(), collection::intersection()],
            collection::byte_sets(),
            exact(),
        );
        run.sampled(vec![collection::powerset()], collection::byte_sets(), exact());
        run.sampled(
            vec![optional::first_some::<i32>(), optional::last_some::<i32>()],
            option::of(any::<i32>()),
            exact(),
        );
        run.sampled(
            vec![optional::first::<i32>(), optional::last::<i32>()],
            any::<i32>(),
            exact(),
        );
        run.sampled(
            vec![function::endo()],
            strategy::arrow::<i32, i32>(any::<i32>()),
            strategy::probe::<i32, _>(Exact),
        );

        // =====================================================================
        // Pointwise lifts
        // =====================================================================

        let probe = || strategy::probe::<u8, _>(Exact);
        run.sampled(
            vec![numeric::sum().pointwise::<u8>()],
            strategy::arrow::<u8, i64>(any::<i64>()),
            probe(),
        );
        run.sampled(
            vec![numeric::integers().pointwise::<u8>()],
            strategy::arrow::<u8, i64>(any::<i64>()),
            probe(),
        );
        run.sampled(
            vec![numeric::real().pointwise::<u8>()],
            strategy::arrow::<u8, f64>(numeric::reals()),
            strategy::probe::<u8, _>(Approximate::default()),
        );
        run.sampled(
            vec![boolean::bool_algebra().pointwise::<u8>()],
            strategy::arrow::<u8, bool>(any::<bool>()),
            probe(),
        );
        run.sampled(
            vec![collection::concat().pointwise::<u8>()],
            strategy::arrow::<u8, String>(collection::strings()),
            probe(),
        );
        run.sampled(
            vec![modular::gf5().pointwise::<u8>()],
            strategy::arrow::<u8, u8>(modular::residues()),
            probe(),
        );

        // =====================================================================
        // Widened views
        // =====================================================================

        run.sampled(
            vec![numeric::real().widen::<CommutativeRing<f64>>()],
            numeric::reals(),
            strategy::approximate(),
        );
        run.sampled(
            vec![boolean::bool_algebra().widen::<HeytingAlgebra<bool>>()],
            any::<bool>(),
            exact(),
        );
        run.sampled(
            vec![collection::powerset().widen::<BoundedDistributiveLattice<collection::ByteSet>>()],
            collection::byte_sets(),
            exact(),
        );

        // =====================================================================
        // Exhaustive
        // =====================================================================

        run.exhaustive(vec![boolean::or(), boolean::and()], &boolean::DOMAIN, &Exact)?;
        run.exhaustive(vec![boolean::xor()], &boolean::DOMAIN, &Exact)?;
        run.exhaustive(vec![boolean::bool_algebra()], &boolean::DOMAIN, &Exact)?;
        run.exhaustive(vec![boolean::boolean_ring()], &boolean::DOMAIN, &Exact)?;
        run.exhaustive(vec![modular::gf5()], &modular::GF5, &Exact)?;

        let report = run.report;
        info!(
            filter = ?self.filter,
            checked = report.results.len(),
            failed = report.failure_count(),
            "catalog suite finished"
        );
        Ok(report)
    }
}

struct Run<'a> {
    verifier: &'a Verifier,
    filter: Option<&'a str>,
    report: VerificationReport,
}

impl Run<'_> {
    fn stopped(&self) -> bool {
        self.verifier.config().fail_fast && !self.report.all_passed()
    }

    fn select<S>(&self, instances: Vec<Instance<S>>) -> Vec<Instance<S>> {
        instances
            .into_iter()
            .filter(|i| self.filter.is_none_or(|f| i.name().contains(f)))
            .collect()
    }

    fn sampled<S, V, E>(&mut self, instances: Vec<Instance<S>>, values: V, equivalences: E)
    where
        S: AlgebraicStructure,
        S::Value: Debug,
        V: Strategy<Value = S::Value>,
        E: Strategy,
        E::Value: Equivalence<S::Value>,
    {
        let instances = self.select(instances);
        if instances.is_empty() || self.stopped() {
            return;
        }
        let report = self.verifier.verify(&instances, &values, &equivalences);
        self.report.extend(report);
    }

    fn exhaustive<S, E>(
        &mut self,
        instances: Vec<Instance<S>>,
        domain: &[S::Value],
        eq: &E,
    ) -> Result<(), VerifyError>
    where
        S: AlgebraicStructure,
        S::Value: Debug,
        E: Equivalence<S::Value> + Debug,
    {
        let instances = self.select(instances);
        if instances.is_empty() || self.stopped() {
            return Ok(());
        }
        let report = self.verifier.verify_exhaustive(&instances, domain, eq)?;
        self.report.extend(report);
        Ok(())
    }
}
