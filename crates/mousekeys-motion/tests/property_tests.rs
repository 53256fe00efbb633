//! Property-based tests for the motion integrator.

use mousekeys_curves::MovementConfig;
use mousekeys_motion::prelude::*;
use quickcheck_macros::quickcheck;

fn sanitize_speed(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-5000.0, 5000.0)
    } else {
        0.0
    }
}

fn drive(state: &mut MovementState, config: &MovementConfig, target: Vector2, steps: &[u8]) -> i64 {
    let mut now = 0i64;
    for &step in steps {
        let _ = advance(state, config, target, now);
        now += i64::from(step);
    }
    now
}

#[quickcheck]
fn prop_zero_target_always_resets(x: f32, y: f32, steps: Vec<u8>, delay: u8) -> bool {
    let config = MovementConfig::default().with_delay(u32::from(delay));
    let mut state = MovementState::new();
    let target = Vector2::new(sanitize_speed(x), sanitize_speed(y));
    let now = drive(&mut state, &config, target, &steps);

    let out = advance(&mut state, &config, Vector2::ZERO, now);
    out == Vector2::ZERO && state == MovementState::new()
}

#[quickcheck]
fn prop_first_tick_is_zero(x: f32, y: f32, now: i32) -> bool {
    let config = MovementConfig::default();
    let mut state = MovementState::new();
    let out = advance(
        &mut state,
        &config,
        Vector2::new(sanitize_speed(x), sanitize_speed(y)),
        i64::from(now),
    );
    out == Vector2::ZERO
}

#[quickcheck]
fn prop_remainder_stays_below_one_unit(x: f32, y: f32, steps: Vec<u8>) -> bool {
    let config = MovementConfig::default();
    let mut state = MovementState::new();
    let target = Vector2::new(sanitize_speed(x), sanitize_speed(y));
    let mut now = 0i64;
    for step in steps {
        let _ = advance(&mut state, &config, target, now);
        let rest = state.remainder();
        if rest.x.abs() >= 1.0 || rest.y.abs() >= 1.0 {
            return false;
        }
        now += i64::from(step);
    }
    true
}

#[quickcheck]
fn prop_tick_never_overshoots_target(x: f32, steps: Vec<u8>) -> bool {
    let config = MovementConfig::default();
    let mut state = MovementState::new();
    let target = Vector2::new(sanitize_speed(x), 0.0);
    let mut now = 0i64;
    let mut last = 0i64;
    for step in steps {
        let out = advance(&mut state, &config, target, now);
        let bound = target.x.abs() * (now - last) as f32 / 1000.0 + 1.0;
        if out.x.abs() > bound {
            return false;
        }
        last = now;
        now += i64::from(step);
    }
    true
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn accumulated_motion_tracks_continuous_motion(
            speed in -400.0f32..400.0f32,
            tick_ms in 1i64..20i64,
            ticks in 1usize..2000usize,
        ) {
            // A 1 ms ramp saturates on the second tick, so every later tick moves at full speed
            let config = MovementConfig { delay_ms: 0, time_to_max_speed_ms: 1, acceleration_exponent: 2.0 };
            let mut state = MovementState::new();
            let target = Vector2::new(speed, -speed);

            let _ = advance(&mut state, &config, target, 0);
            let mut total = Vector2::ZERO;
            for i in 1..=ticks as i64 {
                total = total + advance(&mut state, &config, target, i * tick_ms);
            }

            let expected = speed * (ticks as f32) * (tick_ms as f32) / 1000.0;
            prop_assert!((total.x - expected).abs() <= 1.0 + expected.abs() * 1e-4);
            prop_assert!((total.y + expected).abs() <= 1.0 + expected.abs() * 1e-4);
        }

        #[test]
        fn direction_is_preserved(
            speed in 1.0f32..4000.0f32,
            tick_ms in 1i64..50i64,
        ) {
            let config = MovementConfig::default();
            let mut pos = MovementState::new();
            let mut neg = MovementState::new();
            for i in 0..100i64 {
                let p = advance(&mut pos, &config, Vector2::new(speed, 0.0), i * tick_ms);
                let n = advance(&mut neg, &config, Vector2::new(-speed, 0.0), i * tick_ms);
                prop_assert!(p.x >= 0.0);
                prop_assert!(n.x <= 0.0);
                prop_assert_eq!(p.x, -n.x);
            }
        }
    }
}
