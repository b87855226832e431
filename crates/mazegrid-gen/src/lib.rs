//! Randomized maze generation.
//!
//! [`MazeGen`] fills a grid with walls at a fixed probability and forces
//! the entry/exit endpoints; [`generate_maze`] is the seeded one-shot
//! convenience over it. The same seed and dimensions always produce the
//! same maze.

pub mod generator;

pub use generator::{MazeGen, WALL_PROBABILITY, generate_maze};
