use crate::astar_trace::astar_traced;
use crate::cell::Cell;
use crate::grid::Grid;
use crate::trace::Trace;
use log::{debug, info, warn};

pub mod astar;
pub mod dijkstra;

/// How a search invocation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The goal was reached; the path is non-empty.
    Found,
    /// Every cell reachable from the start was expanded without meeting the goal.
    Exhausted,
    /// [SearchOptions::max_expansions] cells were expanded without meeting the goal.
    BudgetExceeded,
    /// Start or goal was not given or lies outside of the grid. Nothing was searched.
    MissingEndpoint,
}

/// Tuning shared by all grid solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Whether a cheaper route into an already closed cell still updates its predecessor and
    /// re-enters the frontier (it is never expanded twice). This never changes the result with a
    /// consistent heuristic; turning it off only skips the redundant checks.
    pub relax_closed: bool,
    /// Upper bound on the number of cells a single search may expand.
    pub max_expansions: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> SearchOptions {
        SearchOptions {
            relax_closed: true,
            max_expansions: None,
        }
    }
}

impl SearchOptions {
    pub fn with_relax_closed(mut self, relax_closed: bool) -> SearchOptions {
        self.relax_closed = relax_closed;
        self
    }
    pub fn with_max_expansions(mut self, max_expansions: Option<usize>) -> SearchOptions {
        self.max_expansions = max_expansions;
        self
    }
}

/// The result of one search: the path from start to goal (empty unless
/// [SearchStatus::Found]) and the trace of every frontier insertion and closure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub path: Vec<Cell>,
    pub trace: Trace,
    pub status: SearchStatus,
}

impl SearchOutcome {
    fn missing_endpoint() -> SearchOutcome {
        SearchOutcome {
            path: Vec::new(),
            trace: Trace::new(),
            status: SearchStatus::MissingEndpoint,
        }
    }
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
    /// Number of moves along the path, zero if there is none.
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
    pub fn into_parts(self) -> (Vec<Cell>, Trace) {
        (self.path, self.trace)
    }
}

/// A best-first search over the 4-connected passable cells of a [Grid] with unit step costs.
/// Implementors choose the heuristic; the search loop itself is shared.
pub trait GridSolver {
    /// Estimated remaining cost from `cell` to `goal`.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> f64;

    fn options(&self) -> &SearchOptions;

    /// Searches for a shortest path from `start` to `goal`, recording a [Trace] on the way.
    /// The grid is only read. A missing or out-of-bounds endpoint yields an empty outcome with
    /// [SearchStatus::MissingEndpoint]; an unreachable goal yields an empty path together with
    /// the trace of everything that was explored.
    fn search(&self, grid: &Grid, start: Option<Cell>, goal: Option<Cell>) -> SearchOutcome {
        let (Some(start), Some(goal)) = (start, goal) else {
            debug!("Start or goal not set, skipping search");
            return SearchOutcome::missing_endpoint();
        };
        if !grid.in_bounds(start) || !grid.in_bounds(goal) {
            let (height, width) = grid.dimensions();
            warn!(
                "Search from {} to {} does not fit the {}x{} grid",
                start, goal, height, width
            );
            return SearchOutcome::missing_endpoint();
        }
        let mut trace = Trace::new();
        let (result, status) = astar_traced(
            &start,
            |cell| grid.neighbors(*cell).into_iter().map(|n| (n, 1u32)),
            |cell| self.heuristic(cell, &goal),
            |cell| *cell == goal,
            |cell, kind| trace.push(*cell, kind),
            self.options(),
        );
        let path = match result {
            Some((path, cost)) => {
                info!(
                    "Found path of cost {} from {} to {} after {} trace events",
                    cost,
                    start,
                    goal,
                    trace.len()
                );
                path
            }
            None => {
                info!(
                    "{} is not reachable from {} ({:?}, {} trace events)",
                    goal,
                    start,
                    status,
                    trace.len()
                );
                Vec::new()
            }
        };
        SearchOutcome {
            path,
            trace,
            status,
        }
    }

    /// [search](Self::search) between the start and goal cells marked on the grid.
    fn search_grid(&self, grid: &Grid) -> SearchOutcome {
        self.search(grid, grid.start(), grid.goal())
    }
}
