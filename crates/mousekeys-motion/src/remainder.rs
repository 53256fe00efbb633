//! Sub-unit remainder tracking.
//!
//! Output reports carry whole units only. The fractional part of each tick's
//! displacement is carried into the next tick so that slow motion is not
//! rounded away.

/// Split `movement + remainder` into a whole-unit move and a new remainder.
///
/// The combined value is truncated toward zero, so the remainder always has
/// the same sign as the combined value and lies in `(-1, 1)`. Floor or round
/// would shift the long-run average speed of negative motion.
///
/// # Example
///
/// ```
/// use mousekeys_motion::track_remainder;
///
/// let (whole, rest) = track_remainder(1.75, 0.5);
/// assert_eq!(whole, 2);
/// assert!((rest - 0.25).abs() < 1e-6);
///
/// let (whole, rest) = track_remainder(-1.75, 0.0);
/// assert_eq!(whole, -1);
/// assert!((rest + 0.75).abs() < 1e-6);
/// ```
#[inline]
pub fn track_remainder(movement: f32, remainder: f32) -> (i32, f32) {
    let combined = movement + remainder;
    let whole = combined.trunc();
    // `as` saturates out-of-range values and maps NaN to 0
    (whole as i32, combined - whole)
}
