//! Reachability search from the start cell to the finish cell.
//!
//! One algorithm serves both traversal orders: the [`Frontier`] it is handed
//! decides what comes out next. Cells are marked visited only after they are
//! expanded, and the visited check happens when a position is taken off the
//! frontier rather than when it is put on. A position can therefore be
//! pending several times, but each cell is expanded at most once, which bounds
//! the total number of insertions at four per passable cell and guarantees
//! termination.


use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::frontier::{Discipline, Frontier};
use crate::grid::{Cell, Grid, Position};

/// Callback run once per position taken off the frontier, before the visited
/// check. Purely observational; used for step-through display.
pub trait SearchObserver {
    fn on_dequeue(&mut self, grid: &Grid, position: Position);
}

impl<F> SearchObserver for F
where
    F: FnMut(&Grid, Position),
{
    fn on_dequeue(&mut self, grid: &Grid, position: Position) {
        self(grid, position)
    }
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {
    fn on_dequeue(&mut self, _grid: &Grid, _position: Position) {}
}

/// Outcome and counters of one search run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Whether the goal was reached
    pub found: bool,
    /// Ordering policy of the frontier used
    pub discipline: Discipline,
    /// Positions taken off the frontier, including already-visited repeats
    pub dequeued: usize,
    /// Cells whose neighbors were pushed (each at most once)
    pub expanded: usize,
    /// Positions put on the frontier, including the start
    pub inserted: usize,
    /// Largest frontier size seen
    pub peak_frontier: usize,
    /// Cells marked visited when the run ended
    pub visited: usize,
}

impl SearchReport {
    fn new(discipline: Discipline) -> Self {
        SearchReport {
            found: false,
            discipline,
            dequeued: 0,
            expanded: 0,
            inserted: 0,
            peak_frontier: 0,
            visited: 0,
        }
    }
}

/// Whether the finish cell is reachable from the start cell.
///
/// The frontier is drained first, so a reused frontier is fine. The grid's
/// visited flags are left as the search set them.
///
/// A grid without a start cell, or without a finish cell, yields `false`.
pub fn search(grid: &mut Grid, frontier: &mut dyn Frontier) -> bool {
    search_observed(grid, frontier, &mut NoObserver)
}

/// [`search`] with a fresh frontier of the given discipline.
pub fn search_with_discipline(grid: &mut Grid, discipline: Discipline) -> bool {
    solve(grid, discipline, &mut NoObserver).found
}

/// [`search`] with an observer called on every dequeue.
pub fn search_observed(
    grid: &mut Grid,
    frontier: &mut dyn Frontier,
    observer: &mut dyn SearchObserver,
) -> bool {
    let goal = grid.finish_cell().map(Cell::position);
    run(grid, frontier, goal, observer).found
}

/// Whether `goal` is reachable from the start cell, whatever kind of cell
/// `goal` is.
pub fn search_to(grid: &mut Grid, frontier: &mut dyn Frontier, goal: Position) -> bool {
    run(grid, frontier, Some(goal), &mut NoObserver).found
}

/// Run a full search and return its counters.
pub fn solve(
    grid: &mut Grid,
    discipline: Discipline,
    observer: &mut dyn SearchObserver,
) -> SearchReport {
    let mut frontier = discipline.frontier();
    let goal = grid.finish_cell().map(Cell::position);
    run(grid, frontier.as_mut(), goal, observer)
}

fn run(
    grid: &mut Grid,
    frontier: &mut dyn Frontier,
    goal: Option<Position>,
    observer: &mut dyn SearchObserver,
) -> SearchReport {
    let mut report = SearchReport::new(frontier.discipline());

    frontier.clear();
    let Some(start) = grid.start_cell().map(Cell::position) else {
        warn!("grid has no start cell; nothing to search");
        return report;
    };
    if goal.is_none() {
        warn!("grid has no finish cell; search will exhaust the frontier");
    }

    debug!(
        discipline = %report.discipline,
        start = %start,
        width = grid.width(),
        height = grid.height(),
        "search_start"
    );

    frontier.insert(start);
    report.inserted = 1;
    report.peak_frontier = 1;

    while let Ok(current) = frontier.remove_next() {
        report.dequeued += 1;
        observer.on_dequeue(grid, current);

        if grid.cell_at(current.x, current.y).is_visited() {
            trace!(position = %current, "skip_visited");
            continue;
        }

        if Some(current) == goal {
            report.found = true;
            break;
        }

        trace!(position = %current, pending = frontier.size(), "expand");
        for neighbor in grid.neighbors(current.x, current.y) {
            if !neighbor.is_wall() {
                frontier.insert(neighbor.position());
                report.inserted += 1;
            }
        }
        report.peak_frontier = report.peak_frontier.max(frontier.size());

        grid.cell_at_mut(current.x, current.y).mark_visited();
        report.expanded += 1;
    }

    report.visited = grid.visited_count();

    debug!(
        found = report.found,
        dequeued = report.dequeued,
        expanded = report.expanded,
        inserted = report.inserted,
        peak_frontier = report.peak_frontier,
        "search_done"
    );

    report
}
