//! Fuzzes the tick handler with arbitrary configs and tick streams.
//!
//! Input layout: 9 config bytes, then 20-byte ticks of
//! `[dt: u32, move_x, move_y, scroll_x, scroll_y: f32]`, all little-endian.
//! Time deltas are signed so clock regressions are exercised too.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_tick_sequence
#![no_main]
use libfuzzer_sys::fuzz_target;
use mousekeys_curves::MovementConfig;
use mousekeys_engine::{MouseKeysConfig, TickEvent, TickHandler, Vector2};
use mousekeys_hid::RecordingSink;

fn f32_at(chunk: &[u8], at: usize) -> f32 {
    match chunk.get(at..at + 4).and_then(|b| <[u8; 4]>::try_from(b).ok()) {
        Some(bytes) => f32::from_le_bytes(bytes),
        None => 0.0,
    }
}

fn profile(bytes: &[u8]) -> MovementConfig {
    let byte = |i: usize| bytes.get(i).copied().unwrap_or(0);
    MovementConfig {
        delay_ms: u32::from(byte(0)) * 4,
        time_to_max_speed_ms: u32::from(byte(1)) * 8 + 1,
        acceleration_exponent: f32::from(byte(2) % 64) / 8.0,
    }
}

fuzz_target!(|data: &[u8]| {
    let (head, body) = data.split_at(data.len().min(9));
    let config = MouseKeysConfig {
        pointer: profile(head),
        scroll: profile(head.get(3..).unwrap_or_default()),
    };
    let Ok(mut handler) = TickHandler::new(config) else {
        return;
    };

    let mut sink = RecordingSink::new();
    let mut now = head.get(6..).map_or(0i64, |b| b.iter().map(|&v| i64::from(v)).sum());
    for chunk in body.chunks_exact(20) {
        let dt = i64::from(i32::from_le_bytes([
            chunk.first().copied().unwrap_or(0),
            chunk.get(1).copied().unwrap_or(0),
            chunk.get(2).copied().unwrap_or(0),
            chunk.get(3).copied().unwrap_or(0),
        ]));
        now = now.saturating_add(dt);

        let event = TickEvent::new(
            now,
            Vector2::new(f32_at(chunk, 4), f32_at(chunk, 8)),
            Vector2::new(f32_at(chunk, 12), f32_at(chunk, 16)),
        );
        // Must never panic; every tick reports both profiles.
        let before = sink.calls().len();
        handler.on_tick(&event, &mut sink);
        assert_eq!(sink.calls().len(), before + 2);
    }
});
