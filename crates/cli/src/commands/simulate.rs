//! Simulate a held key sequence

use anyhow::Result;
use mousekeys_engine::{MouseKeysConfig, TickEvent, TickHandler, TickOutput};
use mousekeys_hid::{MouseReport, MouseReportSink, RecordingSink};
use serde::Serialize;
use tracing::info;

use super::{SimulateArgs, check_step_count, load_config};
use crate::error::CliError;
use crate::output;

/// One simulated tick and the HID report it produced.
#[derive(Debug, Clone, Serialize)]
pub struct TickRecord {
    pub timestamp_ms: i64,
    #[serde(flatten)]
    pub output: TickOutput,
    pub report: [u8; mousekeys_hid::MOUSE_REPORT_SIZE],
}

#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub config: MouseKeysConfig,
    pub ticks: Vec<TickRecord>,
    pub total_move: (i64, i64),
    pub total_scroll: (i64, i64),
}

/// Execute the simulate command
pub fn execute(args: &SimulateArgs, json: bool) -> Result<()> {
    check_step_count(args.duration_ms, args.tick_ms)?;
    let config = load_config(args.config.as_deref())?;
    let handler = TickHandler::new(config).map_err(CliError::from)?;
    let simulation = run(handler, args);

    info!(
        ticks = simulation.ticks.len(),
        total_move = ?simulation.total_move,
        total_scroll = ?simulation.total_scroll,
        "simulation finished"
    );
    output::print_simulation(&simulation, json)
}

/// Deliver ticks at `0, T, 2T, ...` up to the requested duration.
pub fn run(mut handler: TickHandler, args: &SimulateArgs) -> Simulation {
    let duration = i64::from(args.duration_ms);
    let step = i64::from(args.tick_ms.max(1));
    let release_at = args.release_at_ms.map(i64::from);

    let mut sink = RecordingSink::new();
    let mut ticks = Vec::new();
    let mut now = 0i64;
    while now <= duration {
        let released = release_at.is_some_and(|at| now >= at);
        let event = if released {
            TickEvent::idle(now)
        } else {
            TickEvent::new(now, args.max_move, args.max_scroll)
        };

        let output = handler.on_tick(&event, &mut sink);
        ticks.push(TickRecord {
            timestamp_ms: now,
            output,
            report: report_bytes(&output),
        });
        now += step;
    }

    Simulation {
        config: handler.config(),
        ticks,
        total_move: sink.total_move(),
        total_scroll: sink.total_scroll(),
    }
}

fn report_bytes(output: &TickOutput) -> [u8; mousekeys_hid::MOUSE_REPORT_SIZE] {
    let mut report = MouseReport::new();
    report.report_move(output.movement.0, output.movement.1);
    report.report_scroll(output.scroll.0, output.scroll.1);
    report.to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mousekeys_engine::Vector2;

    fn args(max_move: Vector2, max_scroll: Vector2) -> SimulateArgs {
        SimulateArgs {
            config: None,
            duration_ms: 400,
            tick_ms: 100,
            max_move,
            max_scroll,
            release_at_ms: None,
        }
    }

    #[test]
    fn ticks_cover_duration_inclusive() {
        let held = args(Vector2::new(300.0, 0.0), Vector2::ZERO);
        let sim = run(TickHandler::default(), &held);
        let times: Vec<i64> = sim.ticks.iter().map(|t| t.timestamp_ms).collect();
        assert_eq!(times, vec![0, 100, 200, 300, 400]);
        assert_eq!(sim.total_move, (76, 0));
        assert_eq!(sim.total_scroll, (0, 0));
    }

    #[test]
    fn release_stops_motion() {
        let mut a = args(Vector2::new(0.0, 500.0), Vector2::new(0.0, 50.0));
        a.release_at_ms = Some(300);
        let sim = run(TickHandler::default(), &a);

        let last = sim.ticks.last().map(|t| t.output);
        assert_eq!(last, Some(TickOutput::default()));
        assert!(sim.ticks.iter().any(|t| !t.output.is_idle()));
    }

    #[test]
    fn report_bytes_follow_outputs() {
        let held = args(Vector2::new(-300.0, 0.0), Vector2::new(0.0, 300.0));
        let sim = run(TickHandler::default(), &held);
        let last = sim.ticks.last().map(|t| t.report);
        // x = -30 (0xFFE2), wheel = 30
        assert_eq!(last, Some([0, 0xE2, 0xFF, 0, 0, 30, 0]));
    }
}
