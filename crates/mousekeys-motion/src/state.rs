//! Per-profile motion state.

use mousekeys_curves::MovementConfig;
use serde::{Deserialize, Serialize};

use crate::vector::Vector2;

/// Timing of an active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gesture {
    /// When the ramp starts, activation time plus the configured delay.
    pub start_ms: i64,
    /// Timestamp of the previous update, used for the per-tick duration.
    pub last_tick_ms: i64,
}

/// Mutable integrator state for one profile.
///
/// A state is either idle (no gesture) or tracking a gesture started at a
/// known time. It is only mutated by [`advance`](crate::advance), once per
/// tick. Create one per profile; a fresh state is equivalent to a reset one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MovementState {
    gesture: Option<Gesture>,
    fractional_remainder: Vector2,
}

impl MovementState {
    /// Create an idle state.
    pub const fn new() -> Self {
        Self {
            gesture: None,
            fractional_remainder: Vector2::ZERO,
        }
    }

    /// Drop the current gesture and any carried remainder.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns `true` while a gesture is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// The active gesture, if any.
    #[inline]
    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// Ramp start time of the active gesture.
    #[inline]
    pub fn start_ms(&self) -> Option<i64> {
        self.gesture.map(|g| g.start_ms)
    }

    /// Timestamp of the last update of the active gesture.
    #[inline]
    pub fn last_tick_ms(&self) -> Option<i64> {
        self.gesture.map(|g| g.last_tick_ms)
    }

    /// Sub-unit displacement carried into the next tick.
    #[inline]
    pub fn remainder(&self) -> Vector2 {
        self.fractional_remainder
    }

    /// Start a gesture at `now_ms` unless one is already running.
    pub(crate) fn begin(&mut self, config: &MovementConfig, now_ms: i64) -> (Gesture, bool) {
        match self.gesture {
            Some(gesture) => (gesture, false),
            None => {
                let gesture = Gesture {
                    start_ms: now_ms.saturating_add(i64::from(config.delay_ms)),
                    last_tick_ms: now_ms,
                };
                self.gesture = Some(gesture);
                (gesture, true)
            }
        }
    }

    pub(crate) fn commit(&mut self, now_ms: i64, remainder: Vector2) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.last_tick_ms = now_ms;
        }
        self.fractional_remainder = remainder;
    }
}
