//! Prelude for the motion crate.
//!
//! This module re-exports the most commonly used types and functions.

pub use crate::integrator::advance;
pub use crate::remainder::track_remainder;
pub use crate::state::{Gesture, MovementState};
pub use crate::vector::Vector2;
