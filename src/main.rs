//! maze - grid maze reachability solver
//!
//! Loads a maze from a text file and reports whether the finish cell can be
//! reached from the start cell, walking the grid depth-first or
//! breadth-first.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use maze_core::error::{ExitCode as MazeExitCode, MazeError};
use maze_core::format::OutputFormat;
use maze_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(MazeExitCode::Success),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit_with(e.exit_code())
        }
    }
}

/// Report a command-line parse failure.
///
/// Help and version requests are left to clap. Everything else is a usage
/// error; when argv asked for `--format json` it is written as a JSON error
/// document, since no `Cli` exists yet to read the format from.
fn report_parse_error(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if informational || !argv_requests_json() {
        err.exit();
    }

    let usage = MazeError::UsageError(err.to_string());
    eprintln!("{}", usage.to_json());
    exit_with(usage.exit_code())
}

fn exit_with(code: MazeExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Whether raw argv selects JSON output, in either `--format json` or
/// `--format=json` form.
fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
