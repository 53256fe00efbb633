//! Relative mouse report.

use serde::{Deserialize, Serialize};

use crate::sink::MouseReportSink;
use crate::{HidError, HidResult, MOUSE_REPORT_SIZE};

/// Relative mouse input report.
///
/// Byte layout: `[buttons, x_lo, x_hi, y_lo, y_hi, wheel, pan]`, deltas
/// little-endian. As a [`MouseReportSink`] it stores the latest movement in
/// `x`/`y` and the latest scroll in `wheel` (vertical) and `pan` (horizontal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MouseReport {
    /// Button bitmap, bit 0 is the primary button
    pub buttons: u8,
    /// Horizontal movement delta
    pub x: i16,
    /// Vertical movement delta
    pub y: i16,
    /// Vertical wheel delta
    pub wheel: i8,
    /// Horizontal wheel delta
    pub pan: i8,
}

impl MouseReport {
    /// Create an empty report.
    pub const fn new() -> Self {
        Self {
            buttons: 0,
            x: 0,
            y: 0,
            wheel: 0,
            pan: 0,
        }
    }

    /// Serialize the report for the transport.
    pub fn to_bytes(&self) -> [u8; MOUSE_REPORT_SIZE] {
        let [x0, x1] = self.x.to_le_bytes();
        let [y0, y1] = self.y.to_le_bytes();
        [
            self.buttons,
            x0,
            x1,
            y0,
            y1,
            self.wheel.to_le_bytes()[0],
            self.pan.to_le_bytes()[0],
        ]
    }

    /// Parse a serialized report.
    ///
    /// # Errors
    ///
    /// Returns [`HidError::InvalidReportSize`] unless `data` is exactly
    /// [`MOUSE_REPORT_SIZE`] bytes long.
    pub fn from_bytes(data: &[u8]) -> HidResult<Self> {
        let Ok(bytes) = <[u8; MOUSE_REPORT_SIZE]>::try_from(data) else {
            return Err(HidError::InvalidReportSize {
                expected: MOUSE_REPORT_SIZE,
                actual: data.len(),
            });
        };
        let [buttons, x0, x1, y0, y1, wheel, pan] = bytes;
        Ok(Self {
            buttons,
            x: i16::from_le_bytes([x0, x1]),
            y: i16::from_le_bytes([y0, y1]),
            wheel: i8::from_le_bytes([wheel]),
            pan: i8::from_le_bytes([pan]),
        })
    }

    /// Returns `true` when the report carries no motion.
    pub fn is_idle(&self) -> bool {
        self.x == 0 && self.y == 0 && self.wheel == 0 && self.pan == 0
    }
}

impl MouseReportSink for MouseReport {
    fn report_move(&mut self, x: i16, y: i16) {
        self.x = x;
        self.y = y;
    }

    fn report_scroll(&mut self, x: i8, y: i8) {
        self.pan = x;
        self.wheel = y;
    }
}
