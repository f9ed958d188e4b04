//! `maze solve` - run the reachability search on a maze file

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use maze_core::error::Result;
use maze_core::format::OutputFormat;
use maze_core::frontier::Discipline;
use maze_core::grid::{Grid, Position};
use maze_core::loader::load_maze;
use maze_core::render::render;
use maze_core::search::{solve, NoObserver, SearchObserver, SearchReport};
use maze_core::trace_time;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::SolveArgs;
use crate::commands::dispatch::CommandContext;

pub const SOLUTION_FOUND: &str = "Maze solution found";
pub const NO_SOLUTION: &str = "Maze solution does not exist";

/// JSON shape of a solve result
#[derive(Debug, Serialize)]
struct SolveOutput<'a> {
    file: String,
    #[serde(flatten)]
    report: &'a SearchReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<String>,
}

/// Prints the maze before every dequeue and, while input lasts, waits for a
/// line on `input` before continuing.
///
/// The first I/O error ends the display; the search itself runs on.
pub struct StepObserver<R, W> {
    input: R,
    output: W,
    visited_marker: char,
    steps: usize,
    waiting: bool,
    failed: bool,
}

impl<R: BufRead, W: Write> StepObserver<R, W> {
    pub fn new(input: R, output: W, visited_marker: char) -> Self {
        Self {
            input,
            output,
            visited_marker,
            steps: 0,
            waiting: true,
            failed: false,
        }
    }

    fn show(&mut self, grid: &Grid, position: Position) -> io::Result<()> {
        writeln!(self.output, "step {}: next {}", self.steps, position)?;
        write!(self.output, "{}", render(grid, self.visited_marker))?;
        if self.waiting {
            write!(self.output, " Press enter to continue ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // stdin closed: keep printing frames without pausing
                self.waiting = false;
                writeln!(self.output)?;
            }
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> SearchObserver for StepObserver<R, W> {
    fn on_dequeue(&mut self, grid: &Grid, position: Position) {
        self.steps += 1;
        if self.failed {
            return;
        }
        if let Err(e) = self.show(grid, position) {
            warn!(error = %e, step = self.steps, "step display failed; continuing without it");
            self.failed = true;
            self.waiting = false;
        }
    }
}

pub fn execute(ctx: &CommandContext, args: &SolveArgs) -> Result<()> {
    let cli = ctx.cli;
    let discipline = match args.agenda {
        Some(discipline) => discipline,
        None => ctx.config.discipline()?,
    };
    let step = args.step || ctx.config.solve.step;
    let marker = ctx.config.visited_marker()?;

    let load_start = Instant::now();
    let mut grid = load_maze(&args.file)?;
    trace_time!(load_start, "load_maze", cells = grid.len());

    let report = run_search(&mut grid, discipline, step, cli.format, marker);

    debug!(
        elapsed = ?ctx.start.elapsed(),
        found = report.found,
        discipline = %discipline,
        "solve"
    );

    let shown = args.show.then(|| render(&grid, marker));
    match cli.format {
        OutputFormat::Human => {
            if let Some(grid) = &shown {
                print!("{grid}");
            }
            println!("{}", result_line(report.found));
        }
        OutputFormat::Json => {
            let output = SolveOutput {
                file: display_path(&args.file),
                report: &report,
                grid: shown,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn run_search(
    grid: &mut Grid,
    discipline: Discipline,
    step: bool,
    format: OutputFormat,
    marker: char,
) -> SearchReport {
    if !step {
        return solve(grid, discipline, &mut NoObserver);
    }

    let stdin = io::stdin();
    // keep stdout clean for the JSON document
    let output: Box<dyn Write> = match format {
        OutputFormat::Human => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };
    let mut observer = StepObserver::new(stdin.lock(), output, marker);
    solve(grid, discipline, &mut observer)
}

pub fn result_line(found: bool) -> &'static str {
    if found {
        SOLUTION_FOUND
    } else {
        NO_SOLUTION
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
