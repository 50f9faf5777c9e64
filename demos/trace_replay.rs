use grid_trace_pathfinding::{search, Cell, CellState, Grid, TraceKind};
use rand::{rngs::StdRng, SeedableRng};

// Generates a random maze on the default 25x30 grid, searches from the top-left to the
// bottom-right corner and prints the explored area halfway through the trace and at the end,
// where
// - # marks a wall
// - S and G mark start and goal
// - + marks a frontier cell, - a closed cell
// - * marks the path

fn render(grid: &Grid, marks: impl Fn(Cell) -> Option<char>) -> String {
    let mut out = String::new();
    for (cell, state) in grid.cells() {
        let ch = match state {
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::Goal => 'G',
            CellState::Empty => marks(cell).unwrap_or('.'),
        };
        out.push(ch);
        if cell.col + 1 == grid.width() {
            out.push('\n');
        }
    }
    out
}

fn main() {
    let mut grid = Grid::default();
    let mut rng = StdRng::seed_from_u64(7);
    grid.generate_maze(&mut rng);
    let start = Cell::new(0, 0);
    let goal = Cell::new(grid.height() - 1, grid.width() - 1);
    for (cell, state) in [(start, CellState::Start), (goal, CellState::Goal)] {
        grid.set_cell(cell, CellState::Empty);
        grid.set_cell(cell, state);
    }

    let outcome = search(&grid, grid.start(), grid.goal());
    println!(
        "{:?}: {} moves, {} trace events",
        outcome.status,
        outcome.path_length(),
        outcome.trace.len()
    );

    for steps in [outcome.trace.len() / 2, outcome.trace.len()] {
        let snapshot = outcome.trace.snapshot(steps);
        let done = steps == outcome.trace.len();
        println!("\nAfter {steps} steps:");
        print!(
            "{}",
            render(&grid, |cell| {
                if done && outcome.path.contains(&cell) {
                    return Some('*');
                }
                snapshot.get(&cell).map(|kind| match kind {
                    TraceKind::Frontier => '+',
                    TraceKind::Closed => '-',
                })
            })
        );
    }
}
