//! Saturating conversions into report ranges.
//!
//! Magnitude beyond the representable range is silently discarded. This is
//! the expected behaviour for very fast motion, not an error.

/// Saturate a displacement into the signed 16-bit movement range.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_to_i16(value: f32) -> i16 {
    // `as` from float saturates at the bounds and maps NaN to 0
    value.clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i16
}

/// Saturate a displacement into the signed 8-bit wheel range.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_to_i8(value: f32) -> i8 {
    value.clamp(f32::from(i8::MIN), f32::from(i8::MAX)) as i8
}
