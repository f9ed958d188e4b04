//! Frontier (agenda) of cells awaiting a visit.
//!
//! The search engine is written once against [`Frontier`]; the discipline of
//! the concrete frontier alone decides whether the walk is depth-first
//! ([`StackFrontier`]) or breadth-first ([`QueueFrontier`]).
//!
//! Frontiers hold [`Position`]s rather than cells: the grid stays the sole
//! owner of cell state. Entries are never deduplicated, so the same position
//! may be pending more than once.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::grid::Position;

/// Ordered container of pending positions.
pub trait Frontier {
    /// Add a position. Always succeeds; duplicates are kept.
    fn insert(&mut self, position: Position);

    /// Remove and return the next position per this frontier's discipline.
    ///
    /// Fails with [`MazeError::EmptyFrontier`] when nothing is pending.
    fn remove_next(&mut self) -> Result<Position>;

    /// The position [`Frontier::remove_next`] would return, without removing it.
    fn peek_next(&self) -> Result<Position>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Drop every pending position.
    fn clear(&mut self);

    fn discipline(&self) -> Discipline;
}

/// Last-in, first-out frontier. Produces a depth-first walk.
#[derive(Debug, Clone, Default)]
pub struct StackFrontier {
    items: Vec<Position>,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn insert(&mut self, position: Position) {
        self.items.push(position);
    }

    fn remove_next(&mut self) -> Result<Position> {
        self.items.pop().ok_or(MazeError::EmptyFrontier)
    }

    fn peek_next(&self) -> Result<Position> {
        self.items.last().copied().ok_or(MazeError::EmptyFrontier)
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn discipline(&self) -> Discipline {
        Discipline::Stack
    }
}

/// First-in, first-out frontier. Produces a breadth-first walk.
#[derive(Debug, Clone, Default)]
pub struct QueueFrontier {
    items: VecDeque<Position>,
}

impl QueueFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn insert(&mut self, position: Position) {
        self.items.push_back(position);
    }

    fn remove_next(&mut self) -> Result<Position> {
        self.items.pop_front().ok_or(MazeError::EmptyFrontier)
    }

    fn peek_next(&self) -> Result<Position> {
        self.items.front().copied().ok_or(MazeError::EmptyFrontier)
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn discipline(&self) -> Discipline {
        Discipline::Queue
    }
}

/// Ordering policy of a frontier, as selected on the command line or in
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// LIFO, depth-first (default)
    #[default]
    Stack,
    /// FIFO, breadth-first
    Queue,
}

impl Discipline {
    /// A new, empty frontier with this discipline.
    pub fn frontier(self) -> Box<dyn Frontier> {
        match self {
            Discipline::Stack => Box::new(StackFrontier::new()),
            Discipline::Queue => Box::new(QueueFrontier::new()),
        }
    }

    pub fn traversal(self) -> &'static str {
        match self {
            Discipline::Stack => "depth-first",
            Discipline::Queue => "breadth-first",
        }
    }
}

impl FromStr for Discipline {
    type Err = MazeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stack" | "dfs" | "depth-first" => Ok(Discipline::Stack),
            "queue" | "bfs" | "breadth-first" => Ok(Discipline::Queue),
            other => Err(MazeError::UnknownDiscipline(other.to_string())),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Stack => write!(f, "stack"),
            Discipline::Queue => write!(f, "queue"),
        }
    }
}
