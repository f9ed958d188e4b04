//! CLI argument parsing for maze
//!
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use maze_core::format::OutputFormat;
pub use args::SolveArgs;
use parse::parse_output_format;

/// maze - decide whether a grid maze can be solved
#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. info, trace, maze_core=debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./maze.toml when present)
    #[arg(long, global = true, env = "MAZE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a maze and report whether the finish is reachable
    Solve(SolveArgs),

    /// Validate a maze file without searching it
    Check {
        /// Maze file to validate
        file: PathBuf,
    },

    /// Print a maze as parsed
    Render {
        /// Maze file to print
        file: PathBuf,

        /// Include the "<width> <height>" line so the output loads again
        #[arg(long)]
        header: bool,
    },
}
