//! Command trait and context for dispatching commands

use std::time::Instant;

use maze_core::config::MazeConfig;
use maze_core::error::Result;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a MazeConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a MazeConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("maze {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Decides whether a grid maze can be solved, depth-first or breadth-first.");
        println!();
        println!("Run `maze --help` for usage information.");
        Ok(())
    }
}
