//! Tick event consumed by the engine.

use mousekeys_motion::Vector2;
use serde::{Deserialize, Serialize};

/// One tick: the current time and the velocities held by the user.
///
/// `max_move` is in pointer units per second, `max_scroll` in scroll units per
/// second. A zero vector means the profile's keys are released.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickEvent {
    /// Monotonic timestamp in milliseconds
    pub timestamp_ms: i64,
    /// Target top speed for pointer movement
    #[serde(default)]
    pub max_move: Vector2,
    /// Target top speed for scroll
    #[serde(default)]
    pub max_scroll: Vector2,
}

impl TickEvent {
    /// Create a tick event.
    pub const fn new(timestamp_ms: i64, max_move: Vector2, max_scroll: Vector2) -> Self {
        Self {
            timestamp_ms,
            max_move,
            max_scroll,
        }
    }

    /// Tick with both profiles released.
    pub const fn idle(timestamp_ms: i64) -> Self {
        Self::new(timestamp_ms, Vector2::ZERO, Vector2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle() {
        let event = TickEvent::idle(42);
        assert_eq!(event.timestamp_ms, 42);
        assert!(event.max_move.is_zero());
        assert!(event.max_scroll.is_zero());
    }

    #[test]
    fn test_missing_velocities_default_to_zero() -> Result<(), serde_json::Error> {
        let event: TickEvent =
            serde_json::from_str(r#"{"timestamp_ms": 10, "max_move": {"x": 1.0, "y": 2.0}}"#)?;
        assert_eq!(event.max_move, Vector2::new(1.0, 2.0));
        assert_eq!(event.max_scroll, Vector2::ZERO);
        Ok(())
    }
}
