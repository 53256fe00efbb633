//! Prelude for the tick engine.
//!
//! ```
//! use mousekeys_engine::prelude::*;
//! ```

pub use crate::config::MouseKeysConfig;
pub use crate::error::{EngineError, EngineResult};
pub use crate::event::TickEvent;
pub use crate::handler::{TickHandler, TickOutput};
pub use crate::profile::{Profile, ProfileKind};
pub use mousekeys_curves::MovementConfig;
pub use mousekeys_hid::MouseReportSink;
pub use mousekeys_motion::Vector2;
