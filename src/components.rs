use crate::cell::Cell;
use crate::grid::Grid;
use log::info;
use petgraph::unionfind::UnionFind;

/// Connected components of the passable cells of a [Grid] under 4-adjacency, computed once
/// from a snapshot of the grid. Lets a caller tell "no route" apart from "route exists" without
/// running a search. Later edits to the grid are not tracked; build a new map after editing.
#[derive(Clone, Debug)]
pub struct ComponentMap {
    height: usize,
    width: usize,
    passable: Vec<bool>,
    components: UnionFind<usize>,
}

impl ComponentMap {
    /// Generates a new [UnionFind] structure and links up passable grid neighbours to the same
    /// components.
    pub fn new(grid: &Grid) -> ComponentMap {
        let (height, width) = grid.dimensions();
        let passable = grid
            .cells()
            .map(|(cell, _)| grid.is_passable(cell))
            .collect::<Vec<bool>>();
        let mut components = UnionFind::new(height * width);
        for (cell, _) in grid.cells() {
            if !grid.is_passable(cell) {
                continue;
            }
            let parent_ix = cell.row * width + cell.col;
            // Linking down and right covers every edge once
            for n in [Cell::new(cell.row + 1, cell.col), Cell::new(cell.row, cell.col + 1)] {
                if let Some(ix) = grid.get_ix(n).filter(|&ix| passable[ix]) {
                    components.union(parent_ix, ix);
                }
            }
        }
        let map = ComponentMap {
            height,
            width,
            passable,
            components,
        };
        info!(
            "Generated {} connected components for {}x{} grid",
            map.component_count(),
            height,
            width
        );
        map
    }

    fn passable_ix(&self, cell: &Cell) -> Option<usize> {
        if cell.row < self.height && cell.col < self.width {
            let ix = cell.row * self.width + cell.col;
            self.passable[ix].then_some(ix)
        } else {
            None
        }
    }

    /// Retrieves the component id a given [Cell] belongs to, [None] for walls and cells outside
    /// of the grid.
    pub fn component(&self, cell: &Cell) -> Option<usize> {
        self.passable_ix(cell).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        match (self.passable_ix(start), self.passable_ix(goal)) {
            (Some(s), Some(g)) => self.components.equiv(s, g),
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Number of distinct components among the passable cells.
    pub fn component_count(&self) -> usize {
        (0..self.passable.len())
            .filter(|&ix| self.passable[ix] && self.components.find(ix) == ix)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 2x3 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid = Grid::new(2, 3);
        grid.set_cell(Cell::new(0, 1), CellState::Wall);
        grid.set_cell(Cell::new(1, 1), CellState::Wall);
        let map = ComponentMap::new(&grid);
        assert_eq!(map.component_count(), 2);
        assert!(map.reachable(&Cell::new(0, 0), &Cell::new(1, 0)));
        assert!(map.unreachable(&Cell::new(0, 0), &Cell::new(0, 2)));
        assert!(map.unreachable(&Cell::new(0, 0), &Cell::new(0, 1)));
        assert_eq!(map.component(&Cell::new(1, 1)), None);
        assert_eq!(
            map.component(&Cell::new(0, 2)),
            map.component(&Cell::new(1, 2))
        );
    }

    /// Asserts that the two corners are connected on a 4-grid, but not through a diagonal gap.
    #[test]
    fn reachable_without_diagonals() {
        let open: Grid = "S..\n.#.\n..G".parse().unwrap();
        let map = ComponentMap::new(&open);
        assert!(map.reachable(&Cell::new(0, 0), &Cell::new(2, 2)));

        let diagonal: Grid = ".#\n#.".parse().unwrap();
        let map = ComponentMap::new(&diagonal);
        assert!(map.unreachable(&Cell::new(0, 0), &Cell::new(1, 1)));
        assert_eq!(map.component_count(), 2);
    }

    #[test]
    fn out_of_bounds_is_unreachable() {
        let map = ComponentMap::new(&Grid::new(2, 2));
        assert!(map.unreachable(&Cell::new(0, 0), &Cell::new(2, 0)));
        assert_eq!(map.component_count(), 1);
    }
}
