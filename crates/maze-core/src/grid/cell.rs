use std::fmt;

use serde::{Deserialize, Serialize};

/// A 0-indexed `(x, y)` location in a grid; `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What occupies a cell. Fixed when the cell is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Wall,
    Open,
    Start,
    Finish,
}

impl CellKind {
    /// Decode one maze-file character. Only `#`, `.`, `o` and `*` are known.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellKind::Wall),
            '.' => Some(CellKind::Open),
            'o' => Some(CellKind::Start),
            '*' => Some(CellKind::Finish),
            _ => None,
        }
    }

    /// The maze-file character for this kind.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => '.',
            CellKind::Start => 'o',
            CellKind::Finish => '*',
        }
    }

    pub fn is_passable(self) -> bool {
        self != CellKind::Wall
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Wall => write!(f, "wall"),
            CellKind::Open => write!(f, "open"),
            CellKind::Start => write!(f, "start"),
            CellKind::Finish => write!(f, "finish"),
        }
    }
}

/// One square of the maze.
///
/// Kind and position never change; only the visited flag is flipped, and
/// only by the search engine through [`Grid::cell_at_mut`](super::Grid::cell_at_mut).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    visited: bool,
    position: Position,
}

impl Cell {
    pub fn new(kind: CellKind, position: Position) -> Self {
        Cell {
            kind,
            visited: false,
            position,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_wall(&self) -> bool {
        !self.kind.is_passable()
    }

    pub fn mark_visited(&mut self) {
        self.visited = true;
    }
}
