//! mousekeysctl - Mouse Keys simulator CLI
//!
//! Drives the mouse keys tick engine with synthetic key holds and prints the
//! reports it would send to the host.

#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{CurveArgs, SimulateArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "mousekeysctl")]
#[command(
    about = "Mouse Keys simulator - drive the pointer and scroll ramps from the command line"
)]
#[command(version)]
#[command(long_about = "
mousekeysctl runs the mouse keys motion engine on the host. It feeds the
engine evenly spaced ticks for a held key combination and prints the pointer
and scroll reports, samples acceleration ramps, and checks config files.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate holding movement and scroll keys
    Simulate(SimulateArgs),

    /// Print the acceleration ramp of a profile
    Curve(CurveArgs),

    /// Load and validate a config file
    Validate {
        /// Config file (.yaml, .yml or .json)
        file: PathBuf,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = ["mousekeysctl", "mousekeys_engine", "mousekeys_motion"]
        .map(|target| format!("{target}={log_level}"))
        .join(",");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let result = execute_command(&cli);

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Simulate(args) => commands::simulate::execute(args, cli.json),
        Commands::Curve(args) => commands::curve::execute(args, cli.json),
        Commands::Validate { file } => commands::validate::execute(file, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
