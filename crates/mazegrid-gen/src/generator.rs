//! Probability-driven maze generation.

use mazegrid_core::{CellKind, Maze};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Probability that any given cell is generated as a wall.
pub const WALL_PROBABILITY: f64 = 0.2;

/// Maze generator over a pseudo-random source.
///
/// The generator consumes random state in a fixed row-major order, so a
/// given rng state and dimensions always produce the same maze.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<StdRng> {
    /// Create a generator seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator over an existing random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows x cols` maze with [`WALL_PROBABILITY`].
    pub fn generate(&mut self, rows: i32, cols: i32) -> Maze {
        self.generate_with(rows, cols, WALL_PROBABILITY)
    }

    /// Generate a `rows x cols` maze with an explicit wall probability.
    ///
    /// Every cell independently becomes a wall with probability
    /// `wall_prob`, path otherwise. The first cell (id 0) is then forced
    /// to [`CellKind::Entry`] and the last (id `rows * cols - 1`) to
    /// [`CellKind::Exit`], overriding whatever the random assignment put
    /// there.
    ///
    /// Dimensions must be at least 1x1 (caller precondition).
    pub fn generate_with(&mut self, rows: i32, cols: i32, wall_prob: f64) -> Maze {
        let mut maze = Maze::from_fn(rows, cols, |_, _| {
            let r: f64 = self.rng.random();
            if r < wall_prob {
                CellKind::Wall
            } else {
                CellKind::Path
            }
        });
        maze.set_kind(maze.entry_id(), CellKind::Entry);
        maze.set_kind(maze.exit_id(), CellKind::Exit);
        maze
    }
}

/// Generate a `rows x cols` maze from an explicit seed.
pub fn generate_maze(rows: i32, cols: i32, seed: u64) -> Maze {
    MazeGen::seeded(seed).generate(rows, cols)
}
