use crate::cell::Cell;
use crate::solver::{GridSolver, SearchOptions};

/// Uniform-cost search: A* with a zero heuristic. Finds the same path lengths as
/// [AstarSolver](crate::solver::astar::AstarSolver) while expanding every cell closer than the
/// goal.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub options: SearchOptions,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver::default()
    }
}

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Cell, _: &Cell) -> f64 {
        0.0
    }
    fn options(&self) -> &SearchOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::solver::astar::AstarSolver;
    use crate::solver::SearchStatus;

    #[test]
    fn matches_astar_length_with_more_expansions() {
        let grid: Grid = "\
            S.........
            .####.###.
            ......#...
            .#.####.#.
            ...#....#G"
            .parse()
            .unwrap();
        let astar = AstarSolver::new().search_grid(&grid);
        let dijkstra = DijkstraSolver::new().search_grid(&grid);
        assert_eq!(astar.status, SearchStatus::Found);
        assert_eq!(dijkstra.status, SearchStatus::Found);
        assert_eq!(astar.path_length(), dijkstra.path_length());
        assert!(dijkstra.trace.closed_cells().count() >= astar.trace.closed_cells().count());
    }
}
