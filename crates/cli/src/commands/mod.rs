//! Command implementations for mousekeysctl

pub mod curve;
pub mod simulate;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use mousekeys_engine::{MouseKeysConfig, ProfileKind, Vector2};
use tracing::debug;

use crate::error::CliError;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Config file (.yaml, .yml or .json); stock profiles when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Length of the simulated run
    #[arg(long, default_value_t = 1000)]
    pub duration_ms: u32,

    /// Tick cadence
    #[arg(
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tick_ms: u32,

    /// Held pointer velocity as X,Y units per second
    #[arg(
        long = "move",
        value_parser = parse_vector,
        default_value = "0,0",
        allow_hyphen_values = true
    )]
    pub max_move: Vector2,

    /// Held scroll velocity as X,Y units per second
    #[arg(
        long = "scroll",
        value_parser = parse_vector,
        default_value = "0,0",
        allow_hyphen_values = true
    )]
    pub max_scroll: Vector2,

    /// Release all keys from this time on
    #[arg(long)]
    pub release_at_ms: Option<u32>,
}

#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Config file (.yaml, .yml or .json); stock profiles when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Profile whose ramp is sampled
    #[arg(long, value_enum, default_value_t = ProfileArg::Pointer)]
    pub profile: ProfileArg,

    /// Target top speed
    #[arg(long, default_value_t = 1000.0, allow_hyphen_values = true)]
    pub speed: f32,

    /// Sampling interval
    #[arg(
        long,
        default_value_t = 25,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub step_ms: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    Pointer,
    Scroll,
}

impl From<ProfileArg> for ProfileKind {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Pointer => ProfileKind::Pointer,
            ProfileArg::Scroll => ProfileKind::Scroll,
        }
    }
}

/// Upper bound on ticks or samples produced by one command.
pub const MAX_STEPS: u32 = 1_000_000;

/// Reject a span that would take `MAX_STEPS` or more steps to cover.
pub fn check_step_count(span_ms: u32, step_ms: u32) -> Result<(), CliError> {
    if span_ms / step_ms.max(1) >= MAX_STEPS {
        return Err(CliError::InvalidArgument(format!(
            "{span_ms} ms at {step_ms} ms per step exceeds {MAX_STEPS} steps"
        )));
    }
    Ok(())
}

/// Parse an `X,Y` pair into a velocity vector.
pub fn parse_vector(s: &str) -> Result<Vector2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid component '{}': {e}", part.trim()))
            .and_then(|v| {
                if v.is_finite() {
                    Ok(v)
                } else {
                    Err(format!("component must be finite, got '{}'", part.trim()))
                }
            })
    };
    Ok(Vector2::new(parse(x)?, parse(y)?))
}

/// Load a config file, or the stock config when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<MouseKeysConfig, CliError> {
    match path {
        Some(path) => Ok(MouseKeysConfig::load(path)?),
        None => {
            debug!("no config file given, using stock profiles");
            Ok(MouseKeysConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vector_accepts_pairs() -> Result<(), String> {
        assert_eq!(parse_vector("300,0")?, Vector2::new(300.0, 0.0));
        assert_eq!(parse_vector(" -12.5 , 4 ")?, Vector2::new(-12.5, 4.0));
        Ok(())
    }

    #[test]
    fn parse_vector_rejects_garbage() {
        assert!(parse_vector("300").is_err());
        assert!(parse_vector("a,1").is_err());
        assert!(parse_vector("1,2,3").is_err());
        assert!(parse_vector("inf,0").is_err());
    }

    #[test]
    fn step_count_is_bounded() {
        assert!(check_step_count(999_999, 1).is_ok());
        assert!(check_step_count(u32::MAX, 5_000).is_ok());
        assert!(matches!(
            check_step_count(1_000_000, 1),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(check_step_count(u32::MAX, 1).is_err());
    }

    #[test]
    fn load_config_defaults_without_path() -> Result<(), CliError> {
        assert_eq!(load_config(None)?, MouseKeysConfig::default());
        Ok(())
    }
}
