//! Tick handler.

use mousekeys_hid::{MouseReportSink, clamp_to_i8, clamp_to_i16};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MouseKeysConfig;
use crate::error::EngineResult;
use crate::event::TickEvent;
use crate::profile::{Profile, ProfileKind};

/// Clamped reports produced by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickOutput {
    /// Pointer delta as sent to `report_move`
    pub movement: (i16, i16),
    /// Scroll delta as sent to `report_scroll`
    pub scroll: (i8, i8),
}

impl TickOutput {
    /// Returns `true` if neither report carries motion.
    pub fn is_idle(&self) -> bool {
        self.movement == (0, 0) && self.scroll == (0, 0)
    }
}

/// Drives the pointer and scroll profiles from tick events.
///
/// Ticks must be delivered serially. Each call to [`on_tick`](Self::on_tick)
/// advances both profiles once and makes exactly one `report_move` and one
/// `report_scroll` call on the sink. It never allocates, blocks or fails.
#[derive(Debug, Clone, PartialEq)]
pub struct TickHandler {
    pointer: Profile,
    scroll: Profile,
}

impl Default for TickHandler {
    fn default() -> Self {
        Self::from_validated(MouseKeysConfig::default())
    }
}

impl TickHandler {
    /// Create a handler with idle profiles.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidProfile`](crate::EngineError::InvalidProfile)
    /// if either profile config is invalid.
    pub fn new(config: MouseKeysConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: MouseKeysConfig) -> Self {
        debug!(pointer = ?config.pointer, scroll = ?config.scroll, "tick handler created");
        Self {
            pointer: Profile::new(ProfileKind::Pointer, config.pointer),
            scroll: Profile::new(ProfileKind::Scroll, config.scroll),
        }
    }

    /// Process one tick and forward both reports to `sink`.
    pub fn on_tick<S>(&mut self, event: &TickEvent, sink: &mut S) -> TickOutput
    where
        S: MouseReportSink + ?Sized,
    {
        let now = event.timestamp_ms;

        let step = self.pointer.advance(event.max_move, now);
        let movement = (clamp_to_i16(step.x), clamp_to_i16(step.y));
        sink.report_move(movement.0, movement.1);

        let step = self.scroll.advance(event.max_scroll, now);
        let scroll = (clamp_to_i8(step.x), clamp_to_i8(step.y));
        sink.report_scroll(scroll.0, scroll.1);

        TickOutput { movement, scroll }
    }

    /// Pointer movement profile.
    pub fn pointer(&self) -> &Profile {
        &self.pointer
    }

    /// Scroll profile.
    pub fn scroll(&self) -> &Profile {
        &self.scroll
    }

    /// Profile by kind.
    pub fn profile(&self, kind: ProfileKind) -> &Profile {
        match kind {
            ProfileKind::Pointer => &self.pointer,
            ProfileKind::Scroll => &self.scroll,
        }
    }

    /// Current configuration of both profiles.
    pub fn config(&self) -> MouseKeysConfig {
        MouseKeysConfig {
            pointer: *self.pointer.config(),
            scroll: *self.scroll.config(),
        }
    }

    /// End any gesture in progress on both profiles.
    pub fn reset(&mut self) {
        debug!("tick handler reset");
        self.pointer.reset();
        self.scroll.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;
    use mousekeys_curves::MovementConfig;
    use mousekeys_hid::{RecordingSink, SinkCall};
    use mousekeys_motion::Vector2;
    use tracing_test::traced_test;

    #[test]
    fn test_one_call_per_profile_per_tick() {
        let mut handler = TickHandler::default();
        let mut sink = RecordingSink::new();

        handler.on_tick(&TickEvent::idle(0), &mut sink);

        let expected = [
            SinkCall::Move { x: 0, y: 0 },
            SinkCall::Scroll { x: 0, y: 0 },
        ];
        assert_eq!(sink.calls(), &expected);
    }

    #[test]
    fn test_output_matches_sink() {
        let mut handler = TickHandler::default();
        let mut sink = RecordingSink::new();
        let held = TickEvent::new(0, Vector2::new(-600.0, 300.0), Vector2::new(0.0, 50.0));

        handler.on_tick(&held, &mut sink);
        let later = TickEvent {
            timestamp_ms: 500,
            ..held
        };
        let out = handler.on_tick(&later, &mut sink);

        assert_eq!(out.movement, (-300, 150));
        assert_eq!(out.scroll, (0, 25));
        assert_eq!(sink.moves().last(), Some(out.movement));
        assert_eq!(sink.scrolls().last(), Some(out.scroll));
    }

    #[test]
    fn test_new_rejects_invalid_profile() {
        let config = MouseKeysConfig {
            scroll: MovementConfig {
                time_to_max_speed_ms: 0,
                ..MovementConfig::default()
            },
            ..MouseKeysConfig::default()
        };
        assert!(matches!(
            TickHandler::new(config),
            Err(EngineError::InvalidProfile {
                profile: ProfileKind::Scroll,
                ..
            })
        ));
    }

    #[test]
    fn test_reset_ends_both_gestures() {
        let mut handler = TickHandler::default();
        let mut sink = RecordingSink::new();
        handler.on_tick(
            &TickEvent::new(0, Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)),
            &mut sink,
        );
        assert!(handler.pointer().state().is_active());
        assert!(handler.scroll().state().is_active());

        handler.reset();
        assert!(!handler.profile(ProfileKind::Pointer).state().is_active());
        assert!(!handler.profile(ProfileKind::Scroll).state().is_active());
    }

    #[test]
    fn test_config_round_trip() {
        let config = MouseKeysConfig {
            pointer: MovementConfig::default().with_delay(30),
            scroll: MovementConfig::default(),
        };
        let handler = match TickHandler::new(config) {
            Ok(h) => h,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(handler.config(), config);
    }

    #[test]
    #[traced_test]
    fn test_reset_is_logged() {
        let mut handler = TickHandler::default();
        handler.reset();
        assert!(logs_contain("tick handler reset"));
    }
}
