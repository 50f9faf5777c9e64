use criterion::{criterion_group, criterion_main, Criterion};
use grid_trace_pathfinding::{
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver},
    Cell, CellState, Grid,
};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

fn maze(height: usize, width: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(height, width);
    let mut rng = StdRng::seed_from_u64(seed);
    grid.generate_maze(&mut rng);
    for (cell, state) in [
        (Cell::new(0, 0), CellState::Start),
        (Cell::new(height - 1, width - 1), CellState::Goal),
    ] {
        grid.set_cell(cell, CellState::Empty);
        grid.set_cell(cell, state);
    }
    grid
}

fn search_bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    for (height, width) in [(25, 30), (100, 100), (300, 300)] {
        let grids = (0..10)
            .map(|seed| maze(height, width, seed))
            .collect::<Vec<_>>();
        c.bench_function(
            format!("{solver_name}, {height}x{width} random maze").as_str(),
            |b| {
                b.iter(|| {
                    for grid in &grids {
                        black_box(solver.search_grid(grid));
                    }
                })
            },
        );
    }
}

fn astar_bench(c: &mut Criterion) {
    search_bench_solver(c, "A*", AstarSolver::new());
}

fn dijkstra_bench(c: &mut Criterion) {
    search_bench_solver(c, "Dijkstra", DijkstraSolver::new());
}

criterion_group!(benches, astar_bench, dijkstra_bench);
criterion_main!(benches);
