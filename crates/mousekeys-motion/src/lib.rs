//! Motion Integrator for Mouse Keys
//!
//! This crate turns a held "desired velocity" into a stream of whole-unit
//! displacements, one per tick, for pointer movement or scroll.
//!
//! # Overview
//!
//! - **Vector2**: two-axis velocity/displacement value
//! - **track_remainder**: truncating split into whole units plus carried fraction
//! - **MovementState**: per-profile gesture timing and fractional remainder
//! - **advance**: the per-tick integrator
//!
//! # RT Safety Guarantees
//!
//! [`advance`] does no allocation, no I/O and no blocking. Logging is limited
//! to gesture boundaries and clock anomalies.
//!
//! # Example
//!
//! ```
//! use mousekeys_curves::MovementConfig;
//! use mousekeys_motion::prelude::*;
//!
//! let config = MovementConfig::default();
//! let mut state = MovementState::new();
//! let held = Vector2::new(0.0, -600.0);
//!
//! let mut total = 0.0;
//! for now_ms in (0..=1_000).step_by(10) {
//!     total += advance(&mut state, &config, held, now_ms).y;
//! }
//! assert!(total < 0.0);
//!
//! // Releasing the keys ends the gesture immediately.
//! assert_eq!(advance(&mut state, &config, Vector2::ZERO, 1_010), Vector2::ZERO);
//! assert!(!state.is_active());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod integrator;
pub mod prelude;
pub mod remainder;
pub mod state;
pub mod vector;

pub use integrator::advance;
pub use remainder::track_remainder;
pub use state::{Gesture, MovementState};
pub use vector::Vector2;
