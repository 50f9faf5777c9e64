//! # grid_trace_pathfinding
//!
//! Shortest paths on a 4-connected occupancy grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), together with an ordered trace of
//! every frontier insertion and closure so that a viewer can replay the search step by step.
//!
//! The [Grid] holds the occupancy (`Empty`, `Wall`, `Start`, `Goal`) and is owned by the
//! caller. [search] reads it and returns a [SearchOutcome] with the path and the [Trace].
//! Moves cost one per step, neighbours are visited in the fixed order down, up, right, left
//! and frontier entries with equal estimates are expanded in insertion order, which makes both
//! the path and the trace reproducible.
//!
//! ```
//! use grid_trace_pathfinding::{search, Cell, Grid};
//!
//! let grid = Grid::new(3, 3);
//! let outcome = search(&grid, Some(Cell::new(0, 0)), Some(Cell::new(2, 2)));
//! assert_eq!(outcome.path_length(), 4);
//! assert!(!outcome.trace.is_empty());
//! ```
mod astar_trace;
pub mod cell;
pub mod components;
pub mod grid;
pub mod solver;
pub mod trace;

pub use cell::Cell;
pub use components::ComponentMap;
pub use grid::{CellState, Grid, ParseGridError};
pub use solver::astar::AstarSolver;
pub use solver::dijkstra::DijkstraSolver;
pub use solver::{GridSolver, SearchOptions, SearchOutcome, SearchStatus};
pub use trace::{Trace, TraceEvent, TraceKind};

/// Number of rows of [Grid::default].
pub const DEFAULT_HEIGHT: usize = 25;
/// Number of columns of [Grid::default].
pub const DEFAULT_WIDTH: usize = 30;
/// Wall probability used by [Grid::generate_maze].
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.2;

/// Runs [AstarSolver] with its default settings from `start` to `goal`.
///
/// A missing endpoint yields an empty path and an empty trace. An unreachable goal yields an
/// empty path and the trace of everything reachable from the start.
pub fn search(grid: &Grid, start: Option<Cell>, goal: Option<Cell>) -> SearchOutcome {
    AstarSolver::new().search(grid, start, goal)
}
