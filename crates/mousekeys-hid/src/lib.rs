//! HID output for mouse keys
//!
//! This crate defines the boundary between the motion integrator and the
//! pointing-device transport: the [`MouseReportSink`] contract, saturating
//! conversions into the report's integer ranges, and a standard relative
//! mouse report that implements the sink.
//!
//! ## Features
//! - Separate entry points for pointer movement and scroll
//! - Saturating `i16` (movement) and `i8` (wheel/pan) clamps
//! - 7-byte relative mouse report with little-endian deltas
//! - Recording sink for tests and host-side simulation

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod clamp;
pub mod recording;
pub mod report;
pub mod sink;

pub use clamp::{clamp_to_i8, clamp_to_i16};
pub use recording::{RecordingSink, SinkCall};
pub use report::MouseReport;
pub use sink::MouseReportSink;

use thiserror::Error;

/// Errors raised while decoding mouse reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HidError {
    /// The buffer does not hold exactly one report.
    #[error("Invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize {
        /// Expected size in bytes
        expected: usize,
        /// Actual size in bytes
        actual: usize,
    },
}

/// Result alias for HID operations.
pub type HidResult<T> = Result<T, HidError>;

/// Size of a serialized [`MouseReport`] in bytes.
pub const MOUSE_REPORT_SIZE: usize = 7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_size() {
        assert_eq!(MOUSE_REPORT_SIZE, 7);
    }

    #[test]
    fn test_error_display() {
        let err = HidError::InvalidReportSize {
            expected: 7,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Invalid report size: expected 7, got 3");
    }
}
