//! Output formatting for CLI responses

use std::path::Path;

use anyhow::{Error, Result};
use colored::*;
use mousekeys_curves::MovementConfig;
use mousekeys_engine::MouseKeysConfig;
use serde_json::json;

use crate::commands::curve::CurveTable;
use crate::commands::simulate::Simulation;
use crate::error::CliError;

const SIMULATION_HEADER: &str = "    t_ms  move_x  move_y   pan wheel  report";
const CURVE_HEADER: &str = "    t_ms fraction        speed";

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::InvalidArgument(_)) => "InvalidArgument",
        Some(CliError::InvalidConfiguration(_)) => "InvalidConfiguration",
        Some(CliError::JsonError(_)) => "JsonError",
        None => "Error",
    }
}

/// Print a simulation run
pub fn print_simulation(simulation: &Simulation, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "simulation": simulation
        });
        println!("{}", pretty_json(&output)?);
        return Ok(());
    }

    print_profile_line("pointer", &simulation.config.pointer);
    print_profile_line("scroll", &simulation.config.scroll);
    println!();
    println!("{}", SIMULATION_HEADER.bold());
    for tick in &simulation.ticks {
        let (mx, my) = tick.output.movement;
        let (sx, sy) = tick.output.scroll;
        let line = format!(
            "{:>8} {:>7} {:>7} {:>5} {:>5}  {}",
            tick.timestamp_ms,
            mx,
            my,
            sx,
            sy,
            hex(&tick.report)
        );
        if tick.output.is_idle() {
            println!("{}", line.dimmed());
        } else {
            println!("{line}");
        }
    }
    println!();
    println!(
        "{} {} ticks, move ({}, {}), scroll ({}, {})",
        "Total:".bold(),
        simulation.ticks.len(),
        simulation.total_move.0,
        simulation.total_move.1,
        simulation.total_scroll.0,
        simulation.total_scroll.1
    );
    Ok(())
}

/// Print sampled ramp values
pub fn print_curve(table: &CurveTable, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "curve": table
        });
        println!("{}", pretty_json(&output)?);
        return Ok(());
    }

    print_profile_line(table.profile.as_str(), &table.config);
    println!("  Target speed: {}", table.target_speed);
    println!();
    println!("{}", CURVE_HEADER.bold());
    for s in &table.samples {
        let (t, fraction, speed) = (s.elapsed_ms, s.fraction, s.speed);
        let line = format!("{t:>8} {fraction:>8.3} {speed:>12.3}");
        if s.saturated {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
    Ok(())
}

/// Print a validated config
pub fn print_config(path: &Path, config: &MouseKeysConfig, json: bool) -> Result<()> {
    if json {
        let output = json!({
            "success": true,
            "path": path.display().to_string(),
            "config": config
        });
        println!("{}", pretty_json(&output)?);
        return Ok(());
    }

    let message = format!("{} is valid", path.display());
    println!("{} {}", "✓".green(), message.bold());
    print_profile_line("pointer", &config.pointer);
    print_profile_line("scroll", &config.scroll);
    Ok(())
}

fn print_profile_line(name: &str, config: &MovementConfig) {
    println!(
        "  {:<8} delay {} ms, ramp {} ms, exponent {}",
        format!("{name}:").cyan(),
        config.delay_ms,
        config.time_to_max_speed_ms,
        config.acceleration_exponent
    );
}

fn pretty_json(value: &serde_json::Value) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
