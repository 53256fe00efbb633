//! In-memory sink that records every report call.

use serde::{Deserialize, Serialize};

use crate::sink::MouseReportSink;

/// One call made on a [`MouseReportSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SinkCall {
    /// `report_move(x, y)`
    Move {
        /// Horizontal delta
        x: i16,
        /// Vertical delta
        y: i16,
    },
    /// `report_scroll(x, y)`
    Scroll {
        /// Horizontal delta
        x: i8,
        /// Vertical delta
        y: i8,
    },
}

/// Sink that keeps the ordered history of report calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in the order they were made.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Movement deltas in call order.
    pub fn moves(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            SinkCall::Move { x, y } => Some((x, y)),
            SinkCall::Scroll { .. } => None,
        })
    }

    /// Scroll deltas in call order.
    pub fn scrolls(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            SinkCall::Scroll { x, y } => Some((x, y)),
            SinkCall::Move { .. } => None,
        })
    }

    /// Sum of all movement deltas, widened to avoid overflow.
    pub fn total_move(&self) -> (i64, i64) {
        self.moves().fold((0, 0), |(ax, ay), (x, y)| {
            (ax + i64::from(x), ay + i64::from(y))
        })
    }

    /// Sum of all scroll deltas, widened to avoid overflow.
    pub fn total_scroll(&self) -> (i64, i64) {
        self.scrolls().fold((0, 0), |(ax, ay), (x, y)| {
            (ax + i64::from(x), ay + i64::from(y))
        })
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl MouseReportSink for RecordingSink {
    fn report_move(&mut self, x: i16, y: i16) {
        self.calls.push(SinkCall::Move { x, y });
    }

    fn report_scroll(&mut self, x: i8, y: i8) {
        self.calls.push(SinkCall::Scroll { x, y });
    }
}
