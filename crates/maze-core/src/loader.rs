//! Maze text format decoding
//!
//! ```text
//! <width> <height>
//! <row 0: exactly width characters from # . o *>
//! ...
//! <row height-1>
//! ```
//!
//! Rows are trimmed of surrounding whitespace. Blank lines after the last row
//! are ignored. Any other deviation is a [`MazeError::MalformedInput`] naming
//! the 1-based line at fault, and no grid is returned.
//!
//! A loaded grid is also checked to hold exactly one start and one finish.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::bail_malformed;
use crate::error::{MazeError, Result};
use crate::grid::{CellKind, Grid, Position};

/// Load and validate a maze file.
pub fn load_maze(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)
        .map_err(|e| MazeError::io_operation("read maze file", path, e))?;
    let grid = parse_maze(&text)?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "load_maze"
    );
    Ok(grid)
}

/// Parse and validate maze text.
pub fn parse_maze(text: &str) -> Result<Grid> {
    let mut lines = text.lines();
    let (width, height) = parse_header(lines.next())?;

    let mut rows: Vec<&str> = lines.map(str::trim).collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    // sized by the rows actually present; the header is untrusted until checked
    let mut kinds = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        let line = y + 2;
        if y >= height {
            bail_malformed!(line, "found {} rows, expected {height}", rows.len());
        }
        kinds.extend(parse_row(row, line, width)?);
    }

    if rows.len() < height {
        bail_malformed!(
            rows.len() + 2,
            "found {} rows, expected {height}",
            rows.len()
        );
    }

    let grid = Grid::new(width, height, kinds)?;
    validate_endpoints(&grid)?;
    Ok(grid)
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_maze(s)
    }
}

fn parse_header(line: Option<&str>) -> Result<(usize, usize)> {
    let Some(line) = line else {
        bail_malformed!(1, "missing \"<width> <height>\" header");
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        bail_malformed!(
            1,
            "header has {} tokens, expected \"<width> <height>\"",
            tokens.len()
        );
    }

    let width = parse_dimension(tokens[0], "width")?;
    let height = parse_dimension(tokens[1], "height")?;
    Ok((width, height))
}

fn parse_dimension(token: &str, name: &str) -> Result<usize> {
    match token.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(MazeError::malformed(
            1,
            format!("{name} must be a positive integer, got {token:?}"),
        )),
    }
}

fn parse_row(row: &str, line: usize, width: usize) -> Result<Vec<CellKind>> {
    let len = row.chars().count();
    if len != width {
        bail_malformed!(line, "row has {len} cells, expected {width}");
    }

    row.chars()
        .enumerate()
        .map(|(col, ch)| {
            CellKind::from_char(ch).ok_or_else(|| {
                MazeError::malformed(
                    line,
                    format!("unknown character {ch:?} at column {}", col + 1),
                )
            })
        })
        .collect()
}

fn validate_endpoints(grid: &Grid) -> Result<()> {
    let mut start: Option<Position> = None;
    let mut finish: Option<Position> = None;

    for cell in grid.cells() {
        let pos = cell.position();
        match cell.kind() {
            CellKind::Start => match start {
                Some(first) => {
                    return Err(MazeError::DuplicateStart { first, second: pos });
                }
                None => start = Some(pos),
            },
            CellKind::Finish => match finish {
                Some(first) => {
                    return Err(MazeError::DuplicateFinish { first, second: pos });
                }
                None => finish = Some(pos),
            },
            CellKind::Wall | CellKind::Open => {}
        }
    }

    if start.is_none() {
        return Err(MazeError::MissingStart);
    }
    if finish.is_none() {
        return Err(MazeError::MissingFinish);
    }
    Ok(())
}
