//! Acceleration ramp evaluation.
//!
//! The ramp maps the time elapsed since a gesture started to an instantaneous
//! speed. It is modelled on the classic mouse keys acceleration: speed grows
//! from zero along `fraction^exponent` and saturates at the target top speed
//! once the ramp duration has elapsed.

use crate::config::{MovementConfig, QUADRATIC_EXPONENT};

/// Returns `true` once `elapsed_ms` has reached the end of the ramp.
#[inline]
pub fn is_saturated(config: &MovementConfig, elapsed_ms: i64) -> bool {
    elapsed_ms >= i64::from(config.time_to_max_speed_ms)
}

/// Fraction of the ramp completed, clamped to `[0, 1]`.
///
/// Negative elapsed time counts as zero. A zero ramp duration is treated as
/// an already completed ramp.
#[inline]
pub fn time_fraction(config: &MovementConfig, elapsed_ms: i64) -> f32 {
    if config.time_to_max_speed_ms == 0 {
        return 1.0;
    }
    let elapsed = elapsed_ms.max(0) as f32;
    (elapsed / config.time_to_max_speed_ms as f32).clamp(0.0, 1.0)
}

/// Instantaneous speed after `elapsed_ms` of ramp.
///
/// Once saturated this returns `target_max_speed` exactly. Before that it
/// returns `target_max_speed * fraction^exponent`. The exponent is applied to
/// the time fraction only, so a negative target speed keeps its sign.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
///
/// # Example
///
/// ```
/// use mousekeys_curves::{MovementConfig, speed};
///
/// let config = MovementConfig::default(); // 300 ms quadratic ramp
///
/// assert!((speed(&config, 300.0, 150) - 75.0).abs() < 1e-3);
/// assert!((speed(&config, -300.0, 150) + 75.0).abs() < 1e-3);
/// assert_eq!(speed(&config, 300.0, 300).to_bits(), 300.0f32.to_bits());
/// ```
#[inline]
pub fn speed(config: &MovementConfig, target_max_speed: f32, elapsed_ms: i64) -> f32 {
    if is_saturated(config, elapsed_ms) {
        return target_max_speed;
    }
    let fraction = time_fraction(config, elapsed_ms);
    target_max_speed * shape(fraction, config.acceleration_exponent)
}

#[inline]
fn shape(fraction: f32, exponent: f32) -> f32 {
    if (exponent - QUADRATIC_EXPONENT).abs() < f32::EPSILON {
        fraction * fraction
    } else {
        fraction.powf(exponent)
    }
}
