//! Harness behavior on passing, failing and lifted instances.

use algebra_core::{
    AbelianGroup, Arrow, Band, BooleanAlgebra, BoundedSemilattice, Exact, Instance, LawId, Monoid,
    Semigroup, Semilattice, StructureKind,
};
use algebra_verify::{strategy, Verifier, VerifyConfig, VerifyError};
use proptest::prelude::*;

fn verifier(config: VerifyConfig) -> Verifier {
    Verifier::new(config.with_cases(128).deterministic(true)).expect("valid config")
}

fn booleans(name: &str, implies: fn(&bool, &bool) -> bool) -> Instance<BooleanAlgebra<bool>> {
    Instance::new(
        name,
        BooleanAlgebra::new(
            BoundedSemilattice::new(|a: &bool, b: &bool| *a || *b, false),
            BoundedSemilattice::new(|a: &bool, b: &bool| *a && *b, true),
            implies,
        ),
    )
}

// =============================================================================
// Property-based runs
// =============================================================================

#[test]
fn every_declared_law_gets_a_result() {
    let sum = Instance::new(
        "sum",
        AbelianGroup::new(|a: &i64, b: &i64| a.wrapping_add(*b), 0, |a: &i64| a.wrapping_neg()),
    );
    let report = verifier(VerifyConfig::default()).verify(&[sum], &any::<i64>(), &strategy::exact());
    assert!(report.all_passed(), "{report}");
    let laws: Vec<LawId> = report.results.iter().map(|r| r.law).collect();
    assert_eq!(
        laws,
        [LawId::Associativity, LawId::Commutativity, LawId::Identity, LawId::Inverse]
    );
    assert!(report.results.iter().all(|r| r.kind == StructureKind::AbelianGroup));
}

#[test]
fn broken_instance_is_reported_with_counterexample() {
    let good = Instance::new("concat", Semigroup::new(|a: &String, b: &String| format!("{a}{b}")));
    let reversed = Instance::new("reversed concat", Semigroup::new(|a: &String, b: &String| format!("{b}{a}")));
    let report = verifier(VerifyConfig::default()).verify(
        &[good, reversed],
        &"[a-c]{0,3}",
        &strategy::exact(),
    );
    assert!(report.all_passed(), "{report}");

    let diff = Instance::new("difference", Semigroup::new(|a: &i32, b: &i32| a.wrapping_sub(*b)));
    let report = verifier(VerifyConfig::default()).verify(&[diff], &any::<i32>(), &strategy::exact());
    assert_eq!(report.failure_count(), 1);
    let failure = report.failures().next().expect("one failure");
    assert_eq!(failure.instance, "difference");
    assert_eq!(failure.law, LawId::Associativity);
    let cx = failure.counterexample.as_ref().expect("counterexample");
    assert_eq!(cx.operands.len(), 3);
    // shrinking drives the operands towards zero; c must stay nonzero
    assert_ne!(cx.operands[2], "0");
}

#[test]
fn fail_fast_stops_after_first_failure() {
    let broken = || {
        Instance::new("broken", Monoid::new(|a: &u8, b: &u8| a.wrapping_sub(*b), 1))
    };
    let all = verifier(VerifyConfig::default()).verify(&[broken(), broken()], &any::<u8>(), &strategy::exact());
    assert_eq!(all.results.len(), 4);
    assert_eq!(all.failure_count(), 4);

    let fast = verifier(VerifyConfig::default().fail_fast(true))
        .verify(&[broken(), broken()], &any::<u8>(), &strategy::exact());
    assert_eq!(fast.results.len(), 1);
    assert_eq!(fast.failure_count(), 1);
}

#[test]
fn deterministic_runs_are_reproducible() {
    let run = || {
        let diff = Instance::new("difference", Semigroup::new(|a: &i64, b: &i64| a.wrapping_sub(*b)));
        verifier(VerifyConfig::default()).verify(&[diff], &any::<i64>(), &strategy::exact())
    };
    assert_eq!(run(), run());
}

#[test]
fn approximate_equivalence_for_reals() {
    let sum = Instance::new(
        "real sum",
        AbelianGroup::new(|a: &f64, b: &f64| a + b, 0.0, |a: &f64| -a),
    );
    let values = -1.0e6..1.0e6_f64;
    let exact = verifier(VerifyConfig::default()).verify(&[sum.clone()], &values, &strategy::exact());
    let approx = verifier(VerifyConfig::default()).verify(&[sum], &values, &strategy::approximate());
    assert!(approx.all_passed(), "{approx}");
    // rounding breaks exact associativity for some triple
    assert!(exact.failures().any(|r| r.law == LawId::Associativity));
}

#[test]
fn constant_operation_is_not_a_band() {
    let band = Instance::new("constant", Band::new(|_: &u8, _: &u8| 0));
    let report = verifier(VerifyConfig::default()).verify(&[band], &any::<u8>(), &strategy::exact());
    let failed: Vec<LawId> = report.failures().map(|r| r.law).collect();
    assert_eq!(failed, [LawId::Idempotency]);

    let semilattice = Instance::new("constant", Semilattice::new(|_: &u8, _: &u8| 0));
    let report = verifier(VerifyConfig::default())
        .verify_exhaustive(&[semilattice], &[0, 1, 2], &Exact)
        .expect("small domain");
    assert_eq!(report.failure_count(), 1);
    let cx = report.failures().next().and_then(|r| r.counterexample.clone()).expect("cx");
    assert_eq!(cx.operands, ["0", "1"]);
}

// =============================================================================
// Lifted instances
// =============================================================================

#[test]
fn lifted_instance_passes_with_probe_equivalence() {
    let sum = Instance::new(
        "sum",
        AbelianGroup::new(|a: &i32, b: &i32| a.wrapping_add(*b), 0, |a: &i32| a.wrapping_neg()),
    );
    let lifted = sum.pointwise::<u16>();
    let report = verifier(VerifyConfig::default()).verify(
        &[lifted],
        &strategy::arrow::<u16, i32>(any::<i32>()),
        &strategy::probe::<u16, _>(Exact),
    );
    assert!(report.all_passed(), "{report}");
    assert!(report.results.iter().all(|r| r.instance == "sum (pointwise)"));
}

#[test]
fn lifted_failure_names_arrows() {
    let diff = Instance::new("difference", Semigroup::new(|a: &i32, b: &i32| a.wrapping_sub(*b)));
    let lifted = diff.pointwise::<u8>();
    let report = verifier(VerifyConfig::default()).verify(
        &[lifted],
        &strategy::arrow::<u8, i32>(1..100_i32),
        &strategy::probe::<u8, _>(Exact),
    );
    let cx = report
        .failures()
        .next()
        .and_then(|r| r.counterexample.clone())
        .expect("counterexample");
    assert!(cx.operands.iter().all(|o| o.starts_with("table#")), "{cx:?}");
    assert!(cx.equivalence.starts_with("Pointwise"), "{}", cx.equivalence);
}

#[test]
fn composed_arrows_monoid() {
    let endo = Instance::new(
        "endo",
        Monoid::new(|f: &Arrow<i8, i8>, g: &Arrow<i8, i8>| g.then(f), Arrow::identity()),
    );
    let report = verifier(VerifyConfig::default()).verify(
        &[endo],
        &strategy::arrow::<i8, i8>(any::<i8>()),
        &strategy::probe::<i8, _>(Exact),
    );
    assert!(report.all_passed(), "{report}");
}

// =============================================================================
// Exhaustive runs
// =============================================================================

#[test]
fn boolean_algebra_exhaustive() {
    let report = verifier(VerifyConfig::default())
        .verify_exhaustive(&[booleans("bool", |a, b| !*a || *b)], &[false, true], &Exact)
        .expect("small domain");
    assert_eq!(report.results.len(), 13);
    assert!(report.all_passed(), "{report}");
}

#[test]
fn exhaustive_finds_first_failing_tuple() {
    let report = verifier(VerifyConfig::default())
        .verify_exhaustive(&[booleans("bool with and-implication", |a, b| *a && *b)], &[false, true], &Exact)
        .expect("small domain");
    let failed: Vec<LawId> = report.failures().map(|r| r.law).collect();
    assert_eq!(failed, [LawId::Implication, LawId::ExcludedMiddle]);
    let cx = report.failures().next().and_then(|r| r.counterexample.clone()).expect("cx");
    assert_eq!(cx.operands, ["false", "false", "false"]);
}

#[test]
fn exhaustive_rejects_empty_and_oversized_domains() {
    let v = verifier(VerifyConfig::default());
    assert!(matches!(
        v.verify_exhaustive(&[booleans("bool", |a, b| !*a || *b)], &[], &Exact),
        Err(VerifyError::EmptyDomain { .. })
    ));

    let wide: Vec<u32> = (0..1024).collect();
    let max = Instance::new("max", BoundedSemilattice::new(|a: &u32, b: &u32| *a.max(b), 0));
    assert!(matches!(
        v.verify_exhaustive(&[max], &wide, &Exact),
        Err(VerifyError::DomainTooLarge { tuples, .. }) if tuples == 1 << 30
    ));
}
