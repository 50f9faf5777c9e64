use crate::cell::Cell;
use crate::solver::{GridSolver, SearchOptions};

/// A* with the Euclidean distance as heuristic. The distance never overestimates the number of
/// 4-directional moves, so paths are shortest as long as `heuristic_factor` stays at `1.0`.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
    pub options: SearchOptions,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
            options: SearchOptions::default(),
        }
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }
    /// Values above one make the search greedier at the cost of optimality.
    pub fn with_heuristic_factor(mut self, heuristic_factor: f64) -> AstarSolver {
        self.heuristic_factor = heuristic_factor;
        self
    }
    pub fn with_options(mut self, options: SearchOptions) -> AstarSolver {
        self.options = options;
        self
    }
}

impl GridSolver for AstarSolver {
    /// Just the Euclidean distance times the heuristic factor.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> f64 {
        cell.euclidean_distance(goal) * self.heuristic_factor
    }
    fn options(&self) -> &SearchOptions {
        &self.options
    }
}
