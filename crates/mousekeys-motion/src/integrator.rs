//! Tick-driven motion integrator.
//!
//! Each call to [`advance`] moves one profile forward by one tick: it ramps the
//! speed from the gesture start, integrates it over the tick duration and
//! returns the whole-unit part of the displacement.

use mousekeys_curves::{MovementConfig, speed};
use tracing::{trace, warn};

use crate::remainder::track_remainder;
use crate::state::MovementState;
use crate::vector::Vector2;

const MS_PER_SECOND: f32 = 1000.0;

/// Advance `state` by one tick and return the integer-valued displacement.
///
/// - A target of exactly `(0, 0)` ends the gesture immediately: the state is
///   reset and `(0, 0)` is returned. There is no deceleration phase.
/// - An idle state starts a gesture whose ramp begins at
///   `now_ms + config.delay_ms`. The first tick has zero duration and so
///   yields `(0, 0)`.
/// - Time before the ramp start (during the delay) counts as zero elapsed.
/// - Each axis is integrated independently and truncated toward zero; the
///   fraction is carried in the state.
///
/// `target_max_speed` is in units per second and `now_ms` is a monotonic
/// millisecond timestamp. A timestamp earlier than the previous tick is
/// treated as a zero-length tick.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
///
/// # Example
///
/// ```
/// use mousekeys_curves::MovementConfig;
/// use mousekeys_motion::{MovementState, Vector2, advance};
///
/// let config = MovementConfig::default();
/// let mut state = MovementState::new();
/// let target = Vector2::new(300.0, 0.0);
///
/// assert_eq!(advance(&mut state, &config, target, 0), Vector2::ZERO);
/// assert_eq!(advance(&mut state, &config, target, 100), Vector2::new(3.0, 0.0));
/// ```
pub fn advance(
    state: &mut MovementState,
    config: &MovementConfig,
    target_max_speed: Vector2,
    now_ms: i64,
) -> Vector2 {
    if target_max_speed.is_zero() {
        if state.is_active() {
            trace!(now_ms, "gesture ended");
        }
        state.reset();
        return Vector2::ZERO;
    }

    let (gesture, started) = state.begin(config, now_ms);
    if started {
        trace!(now_ms, start_ms = gesture.start_ms, "gesture started");
    }

    let tick_ms = tick_duration_ms(gesture.last_tick_ms, now_ms);
    let elapsed_ms = now_ms.saturating_sub(gesture.start_ms).max(0);
    let tick = tick_ms as f32;

    let remainder = state.remainder();
    let (x, rest_x) = track_remainder(
        speed(config, target_max_speed.x, elapsed_ms) * tick / MS_PER_SECOND,
        remainder.x,
    );
    let (y, rest_y) = track_remainder(
        speed(config, target_max_speed.y, elapsed_ms) * tick / MS_PER_SECOND,
        remainder.y,
    );

    state.commit(now_ms, Vector2::new(rest_x, rest_y));
    Vector2::new(x as f32, y as f32)
}

#[inline]
fn tick_duration_ms(last_tick_ms: i64, now_ms: i64) -> i64 {
    let duration = now_ms.saturating_sub(last_tick_ms);
    if duration < 0 {
        warn!(
            last_tick_ms,
            now_ms, "clock regression; treating tick as zero-length"
        );
        return 0;
    }
    duration
}
