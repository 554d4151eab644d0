// ─────────────────────────────────────────────────────────────────────
// Deviation Latch — Kernel Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the evaluate hot path. The running and
//! halted paths are measured separately; both should be a handful of
//! nanoseconds with no allocation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use latch_core::{evaluate_stream, BaselineKernel, SafetyKernel, SharedKernel};

// ── SafetyKernel.evaluate() ─────────────────────────────────────────

fn bench_evaluate_running(c: &mut Criterion) {
    let mut kernel = SafetyKernel::new(1.0);
    c.bench_function("evaluate_running", |b| {
        b.iter(|| kernel.evaluate(black_box(0.5)))
    });
}

fn bench_evaluate_halted(c: &mut Criterion) {
    let mut kernel = SafetyKernel::new(1.0);
    kernel.evaluate(2.0);
    c.bench_function("evaluate_halted", |b| {
        b.iter(|| kernel.evaluate(black_box(0.5)))
    });
}

fn bench_evaluate_metric(c: &mut Criterion) {
    let mut gate = BaselineKernel::new(10.0, 1.0);
    c.bench_function("evaluate_metric", |b| {
        b.iter(|| gate.evaluate_metric(black_box(10.5)))
    });
}

fn bench_shared_evaluate(c: &mut Criterion) {
    let kernel = SharedKernel::new(1.0);
    c.bench_function("shared_evaluate", |b| {
        b.iter(|| kernel.evaluate(black_box(0.5)))
    });
}

// ── evaluate_stream() ───────────────────────────────────────────────

fn bench_stream_1000(c: &mut Criterion) {
    let deviations: Vec<f32> = (0..1000).map(|i| (i % 10) as f32 * 0.05).collect();
    c.bench_function("evaluate_stream_1000", |b| {
        b.iter(|| {
            let mut kernel = SafetyKernel::new(1.0);
            evaluate_stream(&mut kernel, black_box(&deviations))
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate_running,
    bench_evaluate_halted,
    bench_evaluate_metric,
    bench_shared_evaluate,
    bench_stream_1000,
);
criterion_main!(benches);
