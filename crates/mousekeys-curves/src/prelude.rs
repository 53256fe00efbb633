//! Prelude for the curves crate.
//!
//! ```
//! use mousekeys_curves::prelude::*;
//!
//! let config = MovementConfig::default();
//! assert!(speed(&config, 10.0, 0).abs() < f32::EPSILON);
//! ```

pub use crate::config::MovementConfig;
pub use crate::error::{CurveError, CurveResult};
pub use crate::ramp::{is_saturated, speed, time_fraction};
