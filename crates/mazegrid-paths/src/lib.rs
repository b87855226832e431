//! Adjacency graphs and shortest-path search for maze grids.
//!
//! This crate turns a [`Maze`](mazegrid_core::Maze) into a traversal graph
//! and runs an instrumented uniform-cost search over it:
//!
//! - **Adjacency building**: 4-directional, unit-cost edges over exactly
//!   the traversable (non-wall) cells ([`GridGraph::from_maze`])
//! - **Uniform-cost search**: Dijkstra-style shortest path from a start id
//!   to an end id, with per-call performance counters ([`shortest_path`])
//!
//! The search returns a [`SearchResult`] carrying the path (empty when the
//! end is unreachable) together with the `nodes_expanded` and
//! `edges_relaxed` counters for that single invocation. Nothing is shared
//! between calls, so a `GridGraph` can be searched repeatedly or from
//! several threads behind a shared reference.

mod dijkstra;
mod graph;

pub use dijkstra::{SearchResult, shortest_path};
pub use graph::{GridGraph, STEP_COST};
