//! Adjacency graph construction over traversable maze cells.

use std::collections::HashMap;

use mazegrid_core::{CellId, Maze};

/// Cost of one axis-aligned step between adjacent traversable cells.
pub const STEP_COST: f64 = 1.0;

/// Offsets of the four axis-aligned neighbors: up, down, left, right.
const DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Adjacency mapping from a traversable cell's id to its weighted
/// neighbor list.
///
/// Only non-wall cells appear as keys, and every listed neighbor is also
/// non-wall; every edge carries [`STEP_COST`]. The representation is
/// directed but symmetric in practice, since the same neighbor test runs
/// from both endpoints. A traversable cell whose four neighbors are all
/// walls (or out of bounds) has no edges and therefore no key.
///
/// Built once per maze and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct GridGraph {
    pub(crate) edges: HashMap<CellId, Vec<(CellId, f64)>>,
}

impl GridGraph {
    /// Build the adjacency graph for a maze.
    ///
    /// For each non-wall cell, each of the four axis-aligned neighbors is
    /// added as an edge when it lies within bounds and is itself non-wall.
    /// O(rows * cols) time and space.
    pub fn from_maze(maze: &Maze) -> Self {
        let mut edges: HashMap<CellId, Vec<(CellId, f64)>> = HashMap::new();
        for cell in maze {
            if cell.kind.is_wall() {
                continue;
            }
            for (dr, dc) in DIRS {
                let Some(neighbor) = maze.cell_at(cell.row + dr, cell.col + dc) else {
                    continue;
                };
                if neighbor.kind.is_wall() {
                    continue;
                }
                edges
                    .entry(cell.id)
                    .or_default()
                    .push((neighbor.id, STEP_COST));
            }
        }
        let graph = Self { edges };
        log::debug!(
            "built graph for {}x{} maze: {} keyed cells, {} edges",
            maze.rows(),
            maze.cols(),
            graph.len(),
            graph.edge_count()
        );
        graph
    }

    /// Outgoing edges of `id`, in up/down/left/right order.
    ///
    /// Empty for walls, isolated cells, and ids outside the maze.
    #[inline]
    pub fn neighbors(&self, id: CellId) -> &[(CellId, f64)] {
        self.edges.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Whether `id` has at least one edge.
    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Number of keyed (edge-bearing) cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no keyed cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Iterator over the keyed cell ids, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = CellId> + '_ {
        self.edges.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegrid_core::CellKind;

    fn maze_with_walls(rows: i32, cols: i32, walls: &[CellId]) -> Maze {
        let mut maze = Maze::new(rows, cols);
        for &id in walls {
            maze.set_kind(id, CellKind::Wall);
        }
        maze
    }

    #[test]
    fn open_grid_edge_counts() {
        // 3x3, no walls: corners have 2 edges, sides 3, the center 4.
        let graph = GridGraph::from_maze(&Maze::new(3, 3));
        assert_eq!(graph.len(), 9);
        assert_eq!(graph.neighbors(0).len(), 2);
        assert_eq!(graph.neighbors(1).len(), 3);
        assert_eq!(graph.neighbors(4).len(), 4);
        assert_eq!(graph.edge_count(), 24);
    }

    #[test]
    fn walls_are_not_keys_and_not_targets() {
        let maze = maze_with_walls(3, 3, &[4]);
        let graph = GridGraph::from_maze(&maze);
        assert!(!graph.contains(4));
        for id in graph.keys() {
            for &(neighbor, _) in graph.neighbors(id) {
                assert_ne!(neighbor, 4);
            }
        }
    }

    #[test]
    fn every_edge_is_in_bounds_non_wall_unit_cost() {
        let maze = maze_with_walls(4, 5, &[1, 7, 13, 18]);
        let graph = GridGraph::from_maze(&maze);
        for id in graph.keys() {
            assert!(maze.kind_at(id).is_some_and(|k| !k.is_wall()));
            for &(neighbor, weight) in graph.neighbors(id) {
                let cell = maze.cell(neighbor).expect("edge target in bounds");
                assert!(cell.kind.is_traversable());
                assert_eq!(weight, STEP_COST);
            }
        }
    }

    #[test]
    fn graph_is_symmetric() {
        let maze = maze_with_walls(4, 4, &[5, 10]);
        let graph = GridGraph::from_maze(&maze);
        for a in graph.keys() {
            for &(b, _) in graph.neighbors(a) {
                if graph.contains(b) {
                    assert!(
                        graph.neighbors(b).iter().any(|&(back, _)| back == a),
                        "edge {a}->{b} has no reverse"
                    );
                }
            }
        }
    }

    #[test]
    fn isolated_cell_has_no_key() {
        // 2x2 with an anti-diagonal of walls: ids 0 and 3 are traversable
        // but have no traversable neighbors.
        let maze = maze_with_walls(2, 2, &[1, 2]);
        let graph = GridGraph::from_maze(&maze);
        assert!(graph.is_empty());
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let graph = GridGraph::from_maze(&Maze::new(3, 3));
        // Center cell id 4: up 1, down 7, left 3, right 5.
        let ids: Vec<CellId> = graph.neighbors(4).iter().map(|&(n, _)| n).collect();
        assert_eq!(ids, vec![1, 7, 3, 5]);
    }

    #[test]
    fn generated_maze_graph_covers_all_connected_traversables() {
        let maze = mazegrid_gen::generate_maze(20, 20, 5);
        let graph = GridGraph::from_maze(&maze);
        for cell in &maze {
            if cell.kind.is_wall() {
                assert!(!graph.contains(cell.id));
            }
        }
        assert!(!graph.is_empty());
    }
}
