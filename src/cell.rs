use core::fmt;
use smallvec::SmallVec;

/// Maximal number of successors of a cell on a 4-connected grid.
pub const N_NEIGHBORHOOD: usize = 4;

/// A `(row, col)` coordinate on a [Grid](crate::grid::Grid). Rows grow downwards, columns grow
/// to the right. Ordering is by row first, then by column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// The straight-line distance between two cells. Never overestimates the number of
    /// 4-directional unit steps between them.
    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// The number of 4-directional steps between two cells on an open grid.
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one axis-aligned step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The axis-aligned candidates around this cell in the order down, up, right, left.
    /// Candidates that would fall below row or column zero are left out; the upper bounds are
    /// checked by the grid.
    pub fn neighborhood(&self) -> SmallVec<[Cell; N_NEIGHBORHOOD]> {
        let mut cells = SmallVec::new();
        cells.push(Cell::new(self.row + 1, self.col));
        if let Some(row) = self.row.checked_sub(1) {
            cells.push(Cell::new(row, self.col));
        }
        cells.push(Cell::new(self.row, self.col + 1));
        if let Some(col) = self.col.checked_sub(1) {
            cells.push(Cell::new(self.row, col));
        }
        cells
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_order_is_down_up_right_left() {
        let cell = Cell::new(3, 5);
        let expected = [
            Cell::new(4, 5),
            Cell::new(2, 5),
            Cell::new(3, 6),
            Cell::new(3, 4),
        ];
        assert_eq!(cell.neighborhood().as_slice(), &expected);
    }

    #[test]
    fn neighborhood_at_origin_skips_negative_cells() {
        let cell = Cell::new(0, 0);
        assert_eq!(
            cell.neighborhood().as_slice(),
            &[Cell::new(1, 0), Cell::new(0, 1)]
        );
    }

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.euclidean_distance(&b), 5.0);
        assert_eq!(b.euclidean_distance(&a), 5.0);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert!(a.euclidean_distance(&b) <= a.manhattan_distance(&b) as f64);
    }

    #[test]
    fn adjacency_is_four_directional() {
        let c = Cell::new(2, 2);
        assert!(c.is_adjacent(&Cell::new(1, 2)));
        assert!(c.is_adjacent(&Cell::new(2, 3)));
        assert!(!c.is_adjacent(&Cell::new(3, 3)));
        assert!(!c.is_adjacent(&c));
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
        assert_eq!(Cell::from((2, 7)), Cell::new(2, 7));
        assert_eq!(Cell::new(2, 7).to_string(), "(2, 7)");
    }
}
