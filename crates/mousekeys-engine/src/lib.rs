//! Mouse keys tick engine.
//!
//! Owns the two motion profiles (pointer movement and scroll) and turns each
//! tick event into one movement report and one scroll report on a
//! [`MouseReportSink`](mousekeys_hid::MouseReportSink).
//!
//! # Architecture
//!
//! ```text
//! TickEvent ──► TickHandler ──┬─► pointer Profile ─► advance ─► clamp i16 ─► report_move
//!                             └─► scroll Profile  ─► advance ─► clamp i8  ─► report_scroll
//! ```
//!
//! The profiles share nothing: each has its own [`MovementConfig`] and
//! [`MovementState`], and a tick that stops one leaves the other untouched.
//!
//! # Example
//!
//! ```
//! use mousekeys_engine::prelude::*;
//! use mousekeys_hid::RecordingSink;
//!
//! let mut handler = TickHandler::default();
//! let mut sink = RecordingSink::new();
//!
//! for t in (0..=400).step_by(100) {
//!     let event = TickEvent::new(t, Vector2::new(300.0, 0.0), Vector2::ZERO);
//!     handler.on_tick(&event, &mut sink);
//! }
//!
//! assert_eq!(sink.total_move(), (76, 0));
//! assert_eq!(sink.total_scroll(), (0, 0));
//! ```
//!
//! [`MovementConfig`]: mousekeys_curves::MovementConfig
//! [`MovementState`]: mousekeys_motion::MovementState

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod prelude;
pub mod profile;

pub use config::{ConfigFormat, MouseKeysConfig};
pub use error::{EngineError, EngineResult};
pub use event::TickEvent;
pub use handler::{TickHandler, TickOutput};
pub use profile::{Profile, ProfileKind};

pub use mousekeys_curves::MovementConfig;
pub use mousekeys_motion::{MovementState, Vector2};
