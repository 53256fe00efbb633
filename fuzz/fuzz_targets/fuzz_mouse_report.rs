//! Fuzzes the mouse report parser.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_mouse_report
#![no_main]
use libfuzzer_sys::fuzz_target;
use mousekeys_hid::MouseReport;

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes; accepted reports re-encode exactly.
    if let Ok(report) = MouseReport::from_bytes(data) {
        assert_eq!(&report.to_bytes()[..], data);
    }
});
