//! mazebench — generate mazes and time shortest-path searches over them.
//!
//! For each requested grid size the runner generates a maze from the
//! seed, builds the adjacency graph, runs the search from the entry to
//! the exit cell, and reports elapsed seconds, the search counters, and
//! the path length as a fixed-width table or CSV.

mod display;
mod report;

use std::error::Error;
use std::time::Instant;

use clap::Parser;
use mazegrid_gen::{MazeGen, WALL_PROBABILITY};
use mazegrid_paths::{GridGraph, shortest_path};

use crate::report::{GridSize, ReportRow};

#[derive(Parser)]
#[command(name = "mazebench")]
#[command(version)]
#[command(about = "Generate mazes and time shortest-path searches", long_about = None)]
struct Cli {
    /// Grid sizes to run, as ROWSxCOLS.
    #[arg(
        value_name = "SIZE",
        default_values_t = [
            GridSize::new(10, 10),
            GridSize::new(50, 50),
            GridSize::new(100, 100),
            GridSize::new(200, 200),
            GridSize::new(400, 400),
        ]
    )]
    sizes: Vec<GridSize>,

    /// Seed for maze generation; each size is generated from this same
    /// seed, so runs are reproducible size by size.
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Probability that a cell is generated as a wall.
    #[arg(long, default_value_t = WALL_PROBABILITY)]
    wall_prob: f64,

    /// Emit comma-separated rows instead of a table.
    #[arg(long)]
    csv: bool,

    /// Print each maze with the found path overlaid.
    #[arg(long)]
    show: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut rows = Vec::with_capacity(cli.sizes.len());
    for &size in &cli.sizes {
        let maze = MazeGen::seeded(cli.seed).generate_with(size.rows, size.cols, cli.wall_prob);
        let graph = GridGraph::from_maze(&maze);
        let start = maze.entry_id();
        let end = maze.exit_id();

        let begin = Instant::now();
        let result = shortest_path(&graph, start, end);
        let seconds = begin.elapsed().as_secs_f64();

        log::info!(
            "{size}: {seconds:.5}s, {} pops, {} relaxations, path of {}",
            result.nodes_expanded,
            result.edges_relaxed,
            result.path.len()
        );

        if cli.show {
            println!("{}", display::render_path(&maze, &result.path));
        }

        rows.push(ReportRow {
            size,
            seconds,
            nodes_expanded: result.nodes_expanded,
            edges_relaxed: result.edges_relaxed,
            path_len: result.path.len(),
        });
    }

    if cli.csv {
        print!("{}", report::render_csv(&rows));
    } else {
        print!("{}", report::render_table(&rows));
    }

    Ok(())
}
