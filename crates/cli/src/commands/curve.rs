//! Sample a profile's acceleration ramp

use anyhow::Result;
use mousekeys_curves::{MovementConfig, is_saturated, speed, time_fraction};
use mousekeys_engine::ProfileKind;
use serde::Serialize;
use tracing::debug;

use super::{CurveArgs, check_step_count, load_config};
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    pub elapsed_ms: i64,
    pub fraction: f32,
    pub speed: f32,
    pub saturated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveTable {
    pub profile: ProfileKind,
    pub config: MovementConfig,
    pub target_speed: f32,
    pub samples: Vec<CurveSample>,
}

/// Execute the curve command
pub fn execute(args: &CurveArgs, json: bool) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let kind = ProfileKind::from(args.profile);
    let profile = *config.profile(kind);
    check_step_count(profile.time_to_max_speed_ms, args.step_ms)?;

    let table = sample(kind, profile, args.speed, args.step_ms);
    debug!(samples = table.samples.len(), profile = %kind, "curve sampled");
    output::print_curve(&table, json)
}

/// Sample from zero up to and including the saturation point.
pub fn sample(
    profile: ProfileKind,
    config: MovementConfig,
    target_speed: f32,
    step_ms: u32,
) -> CurveTable {
    let end = i64::from(config.time_to_max_speed_ms);
    let step = i64::from(step_ms.max(1));

    let mut samples = Vec::new();
    let mut elapsed = 0i64;
    loop {
        let at = elapsed.min(end);
        samples.push(CurveSample {
            elapsed_ms: at,
            fraction: time_fraction(&config, at),
            speed: speed(&config, target_speed, at),
            saturated: is_saturated(&config, at),
        });
        if at >= end {
            break;
        }
        elapsed += step;
    }

    CurveTable {
        profile,
        config,
        target_speed,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_end_at_saturation() {
        let table = sample(ProfileKind::Pointer, MovementConfig::default(), 300.0, 100);
        let times: Vec<i64> = table.samples.iter().map(|s| s.elapsed_ms).collect();
        assert_eq!(times, vec![0, 100, 200, 300]);

        let last = table.samples.last().copied();
        assert!(last.is_some_and(|s| s.saturated && s.speed == 300.0));
        assert!(table.samples.iter().take(3).all(|s| !s.saturated));
    }

    #[test]
    fn uneven_step_still_hits_saturation() {
        let table = sample(ProfileKind::Scroll, MovementConfig::default(), 10.0, 70);
        let times: Vec<i64> = table.samples.iter().map(|s| s.elapsed_ms).collect();
        assert_eq!(times, vec![0, 70, 140, 210, 280, 300]);
    }

    #[test]
    fn speeds_are_monotonic() {
        let table = sample(ProfileKind::Pointer, MovementConfig::default(), 1000.0, 7);
        assert!(table.samples.windows(2).all(|w| match w {
            [a, b] => a.speed <= b.speed,
            _ => true,
        }));
    }
}
