//! Benchmark tests for the motion integrator.
//!
//! Run with: cargo bench --bench integrator_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use mousekeys_curves::MovementConfig;
use mousekeys_motion::{MovementState, Vector2, advance, track_remainder};

fn bench_advance_ramp(c: &mut Criterion) {
    let config = MovementConfig::default();
    let target = Vector2::new(600.0, -300.0);

    c.bench_function("advance_1000_ticks", |b| {
        b.iter(|| {
            let mut state = MovementState::new();
            for now in 0..1000i64 {
                let velocity = std::hint::black_box(target);
                std::hint::black_box(advance(&mut state, &config, velocity, now));
            }
        });
    });
}

fn bench_track_remainder(c: &mut Criterion) {
    let moves: Vec<f32> = (0..1000).map(|i| (i as f32) * 0.013 - 6.5).collect();

    c.bench_function("track_remainder", |b| {
        b.iter(|| {
            let mut rest = 0.0f32;
            for &m in &moves {
                let (whole, r) = track_remainder(std::hint::black_box(m), rest);
                rest = r;
                std::hint::black_box(whole);
            }
        });
    });
}

criterion_group!(benches, bench_advance_ramp, bench_track_remainder);
criterion_main!(benches);
