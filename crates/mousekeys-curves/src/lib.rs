//! Acceleration Curves for Mouse Keys
//!
//! This crate implements the acceleration ramp used to turn held direction
//! keys into pointer and scroll motion, together with the per-profile
//! configuration that shapes it.
//!
//! # Overview
//!
//! - **MovementConfig**: activation delay, ramp duration and ramp exponent
//! - **speed**: elapsed time and target speed to instantaneous speed
//!
//! # RT Safety Guarantees
//!
//! [`speed`] is a pure function:
//! - No heap allocations
//! - No syscalls or I/O
//! - Bounded execution time
//!
//! # Example
//!
//! ```
//! use mousekeys_curves::{MovementConfig, speed};
//!
//! let config = MovementConfig::new(0, 300, 2.0)?;
//!
//! // Half-way through a quadratic ramp towards 400 px/s
//! let v = speed(&config, 400.0, 150);
//! assert!((v - 100.0).abs() < 1e-3);
//! # Ok::<(), mousekeys_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod prelude;
pub mod ramp;

pub use config::{DEFAULT_TIME_TO_MAX_SPEED_MS, MovementConfig, QUADRATIC_EXPONENT};
pub use error::{CurveError, CurveResult};
pub use ramp::{is_saturated, speed, time_fraction};
