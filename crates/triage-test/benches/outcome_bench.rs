//! Benchmarks for Outcome construction and policy handling

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use triage_core::{Outcome, WarningPolicy};
use triage_test::{check_reading, parse_reading};

fn bench_outcome_chain(c: &mut Criterion) {
    c.bench_function("outcome_chain", |b| {
        b.iter(|| {
            Outcome::<i64>::ok(black_box(40))
                .and_then(|n| Outcome::ok(n + 2))
                .map(|n| n * 2)
        })
    });
}

fn bench_warning_escalation(c: &mut Criterion) {
    c.bench_function("warning_escalation", |b| {
        b.iter(|| {
            Outcome::<i64>::warn(black_box(7), "soft breach")
                .unwrap()
                .on_failure(|_| {}, WarningPolicy::Escalate)
        })
    });
}

fn bench_tolerated_warning(c: &mut Criterion) {
    c.bench_function("tolerated_warning", |b| {
        b.iter(|| {
            Outcome::<i64>::warn(black_box(7), "soft breach")
                .unwrap()
                .on_success(|n| {
                    black_box(*n);
                }, WarningPolicy::Tolerate)
        })
    });
}

fn bench_reading_pipeline(c: &mut Criterion) {
    c.bench_function("reading_pipeline", |b| {
        b.iter(|| {
            parse_reading(black_box("120"))
                .to_value_outcome("no reading supplied")
                .unwrap()
                .and_then(|value| check_reading(value).unwrap())
                .to_maybe()
        })
    });
}

criterion_group!(
    benches,
    bench_outcome_chain,
    bench_warning_escalation,
    bench_tolerated_warning,
    bench_reading_pipeline,
);
criterion_main!(benches);
