//! Benchmarks for law checking.
//!
//! Measures:
//! - Single law checks through the registry dispatch
//! - Exhaustive verification of a small Boolean algebra
//! - A property-based run over a handful of trials

use algebra_core::{
    AbelianGroup, AlgebraicStructure, BooleanAlgebra, BoundedSemilattice, Exact, Instance, LawId,
};
use algebra_verify::{strategy, Verifier, VerifyConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use proptest::prelude::any;

fn sum() -> AbelianGroup<i64> {
    AbelianGroup::new(|a: &i64, b: &i64| a.wrapping_add(*b), 0, |a: &i64| a.wrapping_neg())
}

fn booleans() -> BooleanAlgebra<bool> {
    BooleanAlgebra::new(
        BoundedSemilattice::new(|a: &bool, b: &bool| *a || *b, false),
        BoundedSemilattice::new(|a: &bool, b: &bool| *a && *b, true),
        |a: &bool, b: &bool| !*a || *b,
    )
}

// =============================================================================
// Registry Dispatch
// =============================================================================

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check");
    group.throughput(Throughput::Elements(1));

    let sum = sum();
    for law in <AbelianGroup<i64> as AlgebraicStructure>::LAWS {
        group.bench_with_input(BenchmarkId::new("abelian_group", law), law, |b, &law| {
            b.iter(|| black_box(sum.check(law, &Exact, black_box(&[17, -4, 9]))));
        });
    }

    let bool_algebra = booleans();
    for law in [LawId::Distributivity, LawId::Implication, LawId::ExcludedMiddle] {
        group.bench_with_input(BenchmarkId::new("boolean_algebra", law), &law, |b, &law| {
            b.iter(|| black_box(bool_algebra.check(law, &Exact, black_box(&[true, false, true]))));
        });
    }

    group.finish();
}

// =============================================================================
// Whole-Instance Runs
// =============================================================================

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");

    let exhaustive = Verifier::new(VerifyConfig::default()).expect("valid config");
    let instances = [Instance::new("bool", booleans())];
    group.throughput(Throughput::Elements(13));
    group.bench_function("boolean_algebra_exhaustive", |b| {
        b.iter(|| {
            black_box(
                exhaustive
                    .verify_exhaustive(&instances, &[false, true], &Exact)
                    .expect("small domain"),
            )
        });
    });

    let sampled = Verifier::new(VerifyConfig::default().with_cases(32).deterministic(true))
        .expect("valid config");
    let instances = [Instance::new("sum", sum())];
    group.throughput(Throughput::Elements(4 * 32));
    group.bench_function("abelian_group_32_cases", |b| {
        b.iter(|| black_box(sampled.verify(&instances, &any::<i64>(), &strategy::exact())));
    });

    group.finish();
}

criterion_group!(benches, bench_check, bench_verify);
criterion_main!(benches);
