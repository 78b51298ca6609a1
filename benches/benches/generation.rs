//! Table Generation Benchmark
//!
//! Cost of evaluating and encoding each formula, of higher working
//! precision, and of rendering complete reports.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mint_tables::{render_report, Context, Formula, GeneratorConfig, Report};
use std::hint::black_box;

// =============================================================================
// BENCHMARK 1: FORMULAS
// =============================================================================

/// One full table per formula at production precision.
fn bench_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Formulas");
    let config = GeneratorConfig::production().unwrap();

    for formula in Formula::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(formula.name()),
            &formula,
            |b, &formula| b.iter(|| config.generate(black_box(formula)).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: PRECISION
// =============================================================================

/// Growth of the series formula with working precision.
fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Precision");
    let production = GeneratorConfig::production().unwrap();

    for digits in [30, 60, 120, 240] {
        let config = production
            .clone()
            .with_context(Context::new(digits).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(digits), &config, |b, config| {
            b.iter(|| config.generate(black_box(Formula::GammaT)).unwrap());
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: REPORTS
// =============================================================================

/// End-to-end text output, as printed by the CLI.
fn bench_reports(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Reports");
    let config = GeneratorConfig::production().unwrap();

    for report in Report::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{report:?}")),
            &report,
            |b, &report| b.iter(|| render_report(black_box(report), &config).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_formulas, bench_precision, bench_reports);
criterion_main!(benches);
