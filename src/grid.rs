use crate::cell::{Cell, N_NEIGHBORHOOD};
use crate::{DEFAULT_HEIGHT, DEFAULT_WALL_PROBABILITY, DEFAULT_WIDTH};
use core::fmt;
use itertools::{iproduct, Itertools};
use log::{debug, info, trace};
use rand::Rng;
use smallvec::SmallVec;
use std::str::FromStr;

/// Occupancy of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    Goal,
}

impl CellState {
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }
    fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::Goal => 'G',
        }
    }
    fn from_symbol(ch: char) -> Option<CellState> {
        match ch {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Wall),
            'S' => Some(CellState::Start),
            'G' => Some(CellState::Goal),
            _ => None,
        }
    }
}

/// A fixed-size, row-major occupancy grid. The dimensions are set once at construction.
///
/// The grid keeps track of its start and goal cell: there is at most one of each, and
/// neither can be a wall. Edits that would break this are ignored or demote the previous
/// holder of the role, see [set_cell](Self::set_cell).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
    start: Option<Cell>,
    goal: Option<Cell>,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl Grid {
    /// Creates an all-empty grid with `height` rows and `width` columns.
    pub fn new(height: usize, width: usize) -> Grid {
        Grid {
            height,
            width,
            cells: vec![CellState::Empty; height * width],
            start: None,
            goal: None,
        }
    }
    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn start(&self) -> Option<Cell> {
        self.start
    }
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }
    fn ix(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }
    /// Index of `cell` in row-major order, if it lies on the grid.
    pub fn get_ix(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell).then(|| self.ix(cell))
    }
    /// The state of `cell`, or [None] if it lies outside the grid.
    pub fn state_at(&self, cell: Cell) -> Option<CellState> {
        self.get_ix(cell).map(|ix| self.cells[ix])
    }
    /// Whether a path may pass through `cell`: in bounds and not a wall.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.state_at(cell).is_some_and(|s| !s.is_wall())
    }
    /// All cells with their states in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        iproduct!(0..self.height, 0..self.width).map(move |(row, col)| {
            let cell = Cell::new(row, col);
            (cell, self.cells[self.ix(cell)])
        })
    }
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_wall()).count()
    }

    /// Overwrites the state of `cell`.
    ///
    /// Out-of-bounds cells are ignored, as are attempts to place the start or goal on a wall.
    /// Placing the start (goal) demotes the previous start (goal) cell to [CellState::Empty].
    /// Overwriting the current start or goal cell with any other state removes that role from
    /// the grid.
    pub fn set_cell(&mut self, cell: Cell, state: CellState) {
        let Some(ix) = self.get_ix(cell) else {
            trace!("Ignoring edit of {} outside of the grid", cell);
            return;
        };
        let previous = self.cells[ix];
        if previous.is_wall() && matches!(state, CellState::Start | CellState::Goal) {
            debug!("Cannot place {:?} on wall {}", state, cell);
            return;
        }
        if self.start == Some(cell) && state != CellState::Start {
            self.start = None;
        }
        if self.goal == Some(cell) && state != CellState::Goal {
            self.goal = None;
        }
        match state {
            CellState::Start => {
                if let Some(old) = self.start.replace(cell).filter(|&old| old != cell) {
                    let old_ix = self.ix(old);
                    self.cells[old_ix] = CellState::Empty;
                }
            }
            CellState::Goal => {
                if let Some(old) = self.goal.replace(cell).filter(|&old| old != cell) {
                    let old_ix = self.ix(old);
                    self.cells[old_ix] = CellState::Empty;
                }
            }
            CellState::Empty | CellState::Wall => {}
        }
        self.cells[ix] = state;
    }

    /// Flips `cell` between [CellState::Wall] and [CellState::Empty]. Start, goal and
    /// out-of-bounds cells are left alone.
    pub fn toggle_wall(&mut self, cell: Cell) {
        match self.state_at(cell) {
            Some(CellState::Wall) => self.set_cell(cell, CellState::Empty),
            Some(CellState::Empty) => self.set_cell(cell, CellState::Wall),
            _ => {}
        }
    }

    /// The in-bounds, non-wall neighbours of `cell` in the fixed order down, up, right, left.
    /// Search output depends on this order, so it must stay stable.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; N_NEIGHBORHOOD]> {
        cell.neighborhood()
            .into_iter()
            .filter(|&n| self.is_passable(n))
            .collect()
    }

    /// Clears every cell to [CellState::Empty] and forgets start and goal.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
        self.start = None;
        self.goal = None;
    }

    /// Turns every cell into a wall with probability `wall_probability` (clamped to `[0, 1]`,
    /// NaN counts as zero) and into an empty cell otherwise. Start and goal are cleared.
    pub fn randomize<R: Rng + ?Sized>(&mut self, wall_probability: f64, rng: &mut R) {
        let p = if wall_probability.is_nan() {
            0.0
        } else {
            wall_probability.clamp(0.0, 1.0)
        };
        for state in self.cells.iter_mut() {
            *state = if rng.gen_bool(p) {
                CellState::Wall
            } else {
                CellState::Empty
            };
        }
        self.start = None;
        self.goal = None;
        info!(
            "Generated {}x{} grid with {} walls (p = {})",
            self.height,
            self.width,
            self.wall_count(),
            p
        );
    }

    /// [randomize](Self::randomize) with [DEFAULT_WALL_PROBABILITY].
    pub fn generate_maze<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.randomize(DEFAULT_WALL_PROBABILITY, rng);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            writeln!(f, "{}", row.iter().map(|s| s.symbol()).join(""))?;
        }
        Ok(())
    }
}

/// Errors produced when parsing a grid from its text form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input contains no rows.
    Empty,
    /// A row has a different length than the first one.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside of `.#SG` was found.
    InvalidChar { ch: char, cell: Cell },
    /// A second start or goal marker was found.
    DuplicateRole { state: CellState, cell: Cell },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid text contains no rows"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::InvalidChar { ch, cell } => write!(f, "invalid cell symbol {ch:?} at {cell}"),
            Self::DuplicateRole { state, cell } => write!(f, "second {state:?} marker at {cell}"),
        }
    }
}

impl std::error::Error for ParseGridError {}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses the format written by [fmt::Display]: one line per row, `.` empty, `#` wall,
    /// `S` start and `G` goal. Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Grid, ParseGridError> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let width = rows.first().ok_or(ParseGridError::Empty)?.chars().count();
        let mut grid = Grid::new(rows.len(), width);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseGridError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                let state =
                    CellState::from_symbol(ch).ok_or(ParseGridError::InvalidChar { ch, cell })?;
                let taken = match state {
                    CellState::Start => grid.start.is_some(),
                    CellState::Goal => grid.goal.is_some(),
                    _ => false,
                };
                if taken {
                    return Err(ParseGridError::DuplicateRole { state, cell });
                }
                grid.set_cell(cell, state);
            }
        }
        Ok(grid)
    }
}
