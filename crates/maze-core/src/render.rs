//! Text rendering of grid state
//!
//! Each row becomes one `\n`-terminated line of cell symbols. Open cells the
//! search has visited are drawn with a marker (`x` by default); start, finish
//! and wall cells always keep their own symbol.

use std::fmt;

use crate::grid::{Cell, CellKind, Grid};

/// Marker drawn for visited open cells unless configured otherwise.
pub const DEFAULT_VISITED_MARKER: char = 'x';

/// Symbol for one cell.
pub fn cell_symbol(cell: &Cell, visited_marker: char) -> char {
    if cell.kind() == CellKind::Open && cell.is_visited() {
        visited_marker
    } else {
        cell.kind().symbol()
    }
}

/// The grid body, one line per row.
pub fn render(grid: &Grid, visited_marker: char) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        out.extend(grid.row(y).iter().map(|c| cell_symbol(c, visited_marker)));
        out.push('\n');
    }
    out
}

/// The grid preceded by its `"<width> <height>"` header.
///
/// With no visited cells (or a visited marker that is itself a known cell
/// symbol) the output parses back to the same layout.
pub fn render_with_header(grid: &Grid, visited_marker: char) -> String {
    format!(
        "{} {}\n{}",
        grid.width(),
        grid.height(),
        render(grid, visited_marker)
    )
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, DEFAULT_VISITED_MARKER))
    }
}
