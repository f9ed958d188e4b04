//! Command dispatch logic for maze

use std::env;
use std::time::Instant;

use maze_core::config::MazeConfig;
use maze_core::error::{MazeError, Result};
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()
        .map_err(|e| MazeError::io_operation("resolve", "working directory", e))?;
    let config = MazeConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
