use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mazegrid_gen::generate_maze;
use mazegrid_paths::{GridGraph, shortest_path};

const ROWS: i32 = 100;
const COLS: i32 = 100;
const SEED: u64 = 1234;

pub fn build_graph_100x100(c: &mut Criterion) {
    let maze = generate_maze(ROWS, COLS, SEED);
    c.bench_function("build_graph_100x100", |b| {
        b.iter(|| GridGraph::from_maze(black_box(&maze)))
    });
}

pub fn dijkstra_100x100(c: &mut Criterion) {
    let maze = generate_maze(ROWS, COLS, SEED);
    let graph = GridGraph::from_maze(&maze);
    let end = maze.exit_id();
    c.bench_function("dijkstra_100x100", |b| {
        b.iter(|| shortest_path(black_box(&graph), black_box(0), black_box(end)))
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(50); targets = build_graph_100x100, dijkstra_100x100}
criterion_main!(benches);
