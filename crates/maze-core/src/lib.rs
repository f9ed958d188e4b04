//! Maze Core Library
//!
//! Core domain logic for the maze solver: the grid model, the frontier
//! disciplines and the search engine that drives them, plus the loader and
//! renderer for the maze text format.

pub mod config;
pub mod error;
pub mod format;
pub mod frontier;
pub mod grid;
pub mod loader;
pub mod logging;
pub mod render;
pub mod search;

pub use frontier::{Discipline, Frontier, QueueFrontier, StackFrontier};
pub use grid::{Cell, CellKind, Direction, Grid, Position};
pub use search::{
    search, search_observed, search_to, search_with_discipline, solve, NoObserver,
    SearchObserver, SearchReport,
};
