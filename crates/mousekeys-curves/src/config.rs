//! Per-profile movement configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Exponent of the stock ease-in ramp.
pub const QUADRATIC_EXPONENT: f32 = 2.0;

/// Ramp duration of the stock profiles, in milliseconds.
pub const DEFAULT_TIME_TO_MAX_SPEED_MS: u32 = 300;

/// Configuration for one motion profile (pointer movement or scroll).
///
/// A config is read-only once built and shared by every tick of its profile.
/// Missing fields fall back to [`MovementConfig::default`] when deserializing.
///
/// # Example
///
/// ```
/// use mousekeys_curves::MovementConfig;
///
/// let config = MovementConfig::new(0, 300, 2.0)?;
/// assert_eq!(config.time_to_max_speed_ms, 300);
/// # Ok::<(), mousekeys_curves::CurveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Time to wait after activation before motion starts.
    pub delay_ms: u32,
    /// Ramp duration to reach the target top speed. Must be > 0.
    pub time_to_max_speed_ms: u32,
    /// Shape of the ramp.
    ///
    /// - 0: uniform speed at max speed
    /// - 1: uniform acceleration
    /// - 2: uniform jerk (quadratic ease-in)
    pub acceleration_exponent: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            time_to_max_speed_ms: DEFAULT_TIME_TO_MAX_SPEED_MS,
            acceleration_exponent: QUADRATIC_EXPONENT,
        }
    }
}

impl MovementConfig {
    /// Create a validated movement configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ZeroRampDuration`] if `time_to_max_speed_ms` is 0 and
    /// [`CurveError::InvalidExponent`] if the exponent is negative or not finite.
    pub fn new(
        delay_ms: u32,
        time_to_max_speed_ms: u32,
        acceleration_exponent: f32,
    ) -> CurveResult<Self> {
        let config = Self {
            delay_ms,
            time_to_max_speed_ms,
            acceleration_exponent,
        };
        config.validate()?;
        Ok(config)
    }

    /// Quadratic ease-in ramp with no activation delay.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ZeroRampDuration`] if `time_to_max_speed_ms` is 0.
    pub fn quadratic(time_to_max_speed_ms: u32) -> CurveResult<Self> {
        Self::new(0, time_to_max_speed_ms, QUADRATIC_EXPONENT)
    }

    /// Linear ramp with no activation delay.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ZeroRampDuration`] if `time_to_max_speed_ms` is 0.
    pub fn linear(time_to_max_speed_ms: u32) -> CurveResult<Self> {
        Self::new(0, time_to_max_speed_ms, 1.0)
    }

    /// Return a copy with a different activation delay.
    #[must_use]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Validate the configuration parameters.
    ///
    /// # Errors
    ///
    /// See [`MovementConfig::new`].
    pub fn validate(&self) -> CurveResult<()> {
        if self.time_to_max_speed_ms == 0 {
            return Err(CurveError::ZeroRampDuration);
        }
        if !self.acceleration_exponent.is_finite() || self.acceleration_exponent < 0.0 {
            return Err(CurveError::InvalidExponent(self.acceleration_exponent));
        }
        Ok(())
    }
}
