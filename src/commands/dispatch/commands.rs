//! Command implementations for all maze commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{check, render, solve};
use maze_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Solve(args) => solve::execute(ctx, args),
            Commands::Check { file } => check::execute(ctx, file),
            Commands::Render { file, header } => render::execute(ctx, file, *header),
        }
    }
}
