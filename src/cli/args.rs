use std::path::PathBuf;

use clap::Args;
use maze_core::frontier::Discipline;

use super::parse::parse_discipline;

/// Arguments for `maze solve`
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Maze file to solve
    pub file: PathBuf,

    /// Agenda type: stack (depth-first) or queue (breadth-first)
    #[arg(long, short, value_parser = parse_discipline)]
    pub agenda: Option<Discipline>,

    /// Print the maze before every step and wait for Enter
    #[arg(long)]
    pub step: bool,

    /// Print the final maze with visited cells marked
    #[arg(long)]
    pub show: bool,
}
