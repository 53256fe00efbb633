//! Output sink contract.

/// Destination for the integer deltas produced on each tick.
///
/// Movement and scroll are separate calls so that the two profiles can never
/// be routed into the same report field by mistake. Implementations must not
/// block; each tick makes exactly one call of each kind.
pub trait MouseReportSink {
    /// Accept a pointer-movement delta.
    fn report_move(&mut self, x: i16, y: i16);

    /// Accept a scroll delta. `y` is the vertical wheel, `x` the horizontal pan.
    fn report_scroll(&mut self, x: i8, y: i8);
}

impl<S: MouseReportSink + ?Sized> MouseReportSink for &mut S {
    fn report_move(&mut self, x: i16, y: i16) {
        (**self).report_move(x, y);
    }

    fn report_scroll(&mut self, x: i8, y: i8) {
        (**self).report_scroll(x, y);
    }
}
