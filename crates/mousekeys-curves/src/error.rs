//! Error types for movement configuration.

use thiserror::Error;

/// Error type for acceleration curve configuration.
///
/// The ramp itself never fails at evaluation time; these errors are raised
/// when a [`MovementConfig`](crate::MovementConfig) is constructed or
/// validated, before any tick is processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The ramp duration is zero, which would divide by zero in the time fraction.
    #[error("time_to_max_speed_ms must be > 0")]
    ZeroRampDuration,

    /// The acceleration exponent is negative or not finite.
    #[error("Acceleration exponent must be finite and >= 0, got {0}")]
    InvalidExponent(f32),
}

/// Result alias for curve configuration.
pub type CurveResult<T> = Result<T, CurveError>;
