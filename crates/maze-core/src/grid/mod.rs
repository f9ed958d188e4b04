//! Grid model for the maze
//!
//! A [`Grid`] owns a fixed, row-major rectangle of [`Cell`]s. Its shape never
//! changes after construction; the only mutable state is each cell's visited
//! flag, which the search engine sets as it expands cells. Searching the same
//! layout twice needs a fresh grid (reload it, or clone one that has not been
//! searched yet).

mod cell;
mod direction;


pub use cell::{Cell, CellKind, Position};
pub use direction::Direction;

use crate::error::{MazeError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major cell kinds.
    ///
    /// Fails if either dimension is zero or `kinds` does not hold exactly
    /// `width * height` entries. Start/finish uniqueness is not checked here;
    /// see [`crate::loader`] for the validating entry point.
    pub fn new(width: usize, height: usize, kinds: Vec<CellKind>) -> Result<Self> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(kinds.len()) {
            return Err(MazeError::InvalidShape {
                width,
                height,
                cells: kinds.len(),
            });
        }

        let cells = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Cell::new(kind, Position::new(i % width, i / width)))
            .collect();

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid; both dimensions are positive.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// The cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid. Callers are expected to stay
    /// in bounds; use [`Grid::get`] when that is not known.
    pub fn cell_at(&self, x: usize, y: usize) -> &Cell {
        let index = self.index_of(x, y);
        &self.cells[index]
    }

    /// Mutable access to the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn cell_at_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let index = self.index_of(x, y);
        &mut self.cells[index]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.contains(x, y).then(|| &self.cells[y * self.width + x])
    }

    /// In-bounds neighbors of `(x, y)`, always in north, south, east, west
    /// order. Walls are included; filtering is the caller's job.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<&Cell> {
        let from = Position::new(x, y);
        Direction::ALL
            .iter()
            .filter_map(|dir| dir.step(from, self.width, self.height))
            .map(|pos| self.cell_at(pos.x, pos.y))
            .collect()
    }

    /// First start cell in row-major order, if any.
    pub fn start_cell(&self) -> Option<&Cell> {
        self.first_of(CellKind::Start)
    }

    /// First finish cell in row-major order, if any.
    pub fn finish_cell(&self) -> Option<&Cell> {
        self.first_of(CellKind::Finish)
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visited()).count()
    }

    /// Number of cells a search could ever expand.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.kind().is_passable()).count()
    }

    fn first_of(&self, kind: CellKind) -> Option<&Cell> {
        self.cells.iter().find(|c| c.kind() == kind)
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }
}
