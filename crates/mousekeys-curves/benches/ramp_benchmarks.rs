//! Benchmark tests for ramp evaluation.
//!
//! Run with: cargo bench --bench ramp_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use mousekeys_curves::{MovementConfig, speed};

fn bench_quadratic_ramp(c: &mut Criterion) {
    let config = MovementConfig::default();
    let elapsed: Vec<i64> = (0..=400).collect();

    c.bench_function("quadratic_speed", |b| {
        b.iter(|| {
            for &ms in &elapsed {
                std::hint::black_box(speed(&config, std::hint::black_box(300.0), ms));
            }
        });
    });
}

fn bench_generic_exponent_ramp(c: &mut Criterion) {
    let config = MovementConfig {
        acceleration_exponent: 1.7,
        ..MovementConfig::default()
    };
    let elapsed: Vec<i64> = (0..=400).collect();

    c.bench_function("powf_speed", |b| {
        b.iter(|| {
            for &ms in &elapsed {
                std::hint::black_box(speed(&config, std::hint::black_box(300.0), ms));
            }
        });
    });
}

criterion_group!(benches, bench_quadratic_ramp, bench_generic_exponent_ramp);
criterion_main!(benches);
