//! Motion profiles.

use std::fmt;

use mousekeys_curves::MovementConfig;
use mousekeys_motion::{MovementState, Vector2, advance};
use serde::{Deserialize, Serialize};

/// The two independent motion channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Pointer movement, reported as signed 16-bit deltas
    Pointer,
    /// Scroll, reported as signed 8-bit deltas
    Scroll,
}

impl ProfileKind {
    /// Both kinds, pointer first.
    pub const ALL: [ProfileKind; 2] = [ProfileKind::Pointer, ProfileKind::Scroll];

    /// Lowercase name used in config files and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Pointer => "pointer",
            ProfileKind::Scroll => "scroll",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One motion channel: its kind, its read-only config and its own state.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    kind: ProfileKind,
    config: MovementConfig,
    state: MovementState,
}

impl Profile {
    /// Create an idle profile.
    pub fn new(kind: ProfileKind, config: MovementConfig) -> Self {
        Self {
            kind,
            config,
            state: MovementState::new(),
        }
    }

    /// Which channel this profile drives.
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// The profile's movement config.
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Current integrator state.
    pub fn state(&self) -> &MovementState {
        &self.state
    }

    /// Advance this profile by one tick and return the whole-unit displacement.
    #[inline]
    pub fn advance(&mut self, target_max_speed: Vector2, now_ms: i64) -> Vector2 {
        advance(&mut self.state, &self.config, target_max_speed, now_ms)
    }

    /// End any gesture in progress.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
