//! Uniform-cost shortest-path search with per-call instrumentation.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use mazegrid_core::CellId;

use crate::graph::GridGraph;

/// Outcome of one [`shortest_path`] invocation.
///
/// The counters are scoped to the call that produced them; the engine
/// keeps no state between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cell ids from start to end inclusive; empty when the end is
    /// unreachable.
    pub path: Vec<CellId>,
    /// Priority-queue pops performed. Counts every pop, including
    /// re-expansions of stale entries, so this measures queue churn
    /// rather than unique settled nodes.
    pub nodes_expanded: u64,
    /// Edge-relaxation attempts (distance comparisons).
    pub edges_relaxed: u64,
}

impl SearchResult {
    /// Whether the search failed to reach the end cell.
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        self.path.is_empty()
    }

    /// Total cost of the path: number of edges times the unit step cost.
    /// Zero for unreachable results and single-cell paths.
    pub fn cost(&self) -> f64 {
        self.path.len().saturating_sub(1) as f64 * crate::graph::STEP_COST
    }
}

/// Heap entry: a cell id with its tentative distance at push time.
#[derive(Clone, Copy, PartialEq)]
struct QueueEntry {
    id: CellId,
    dist: f64,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest distance
        // first. Distances are finite sums of positive weights, so
        // total_cmp agrees with numeric order.
        other.dist.total_cmp(&self.dist)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the minimum-cost path from `start` to `end` over `graph`.
///
/// Uniform-cost (Dijkstra-style) search: a min-priority-queue keyed on
/// tentative distance, early exit when `end` is popped. A node may sit in
/// the queue several times with different distances; stale entries are
/// re-expanded on pop rather than skipped, and `nodes_expanded` counts
/// those pops.
///
/// Unreachable ends are reported with an empty path, counters left at
/// whatever work was done before the queue drained. `start == end` yields
/// the single-element path `[start]`. A `start` that is no key in the
/// graph is still seeded at distance 0 and expanded once against an empty
/// neighbor list; unless it equals `end`, the result is unreachable.
pub fn shortest_path(graph: &GridGraph, start: CellId, end: CellId) -> SearchResult {
    let mut dist: HashMap<CellId, f64> =
        graph.keys().map(|id| (id, f64::INFINITY)).collect();
    let mut prev: HashMap<CellId, CellId> = HashMap::new();

    dist.insert(start, 0.0);

    let mut open = BinaryHeap::new();
    open.push(QueueEntry {
        id: start,
        dist: 0.0,
    });

    let mut nodes_expanded: u64 = 0;
    let mut edges_relaxed: u64 = 0;

    while let Some(QueueEntry { id: current, .. }) = open.pop() {
        nodes_expanded += 1;
        if current == end {
            break;
        }
        let current_dist = dist.get(&current).copied().unwrap_or(f64::INFINITY);
        for &(neighbor, weight) in graph.neighbors(current) {
            edges_relaxed += 1;
            let candidate = current_dist + weight;
            let known = dist.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if candidate < known {
                dist.insert(neighbor, candidate);
                prev.insert(neighbor, current);
                open.push(QueueEntry {
                    id: neighbor,
                    dist: candidate,
                });
            }
        }
    }

    let path = reconstruct_path(&prev, start, end);
    log::debug!(
        "search {start} -> {end}: {nodes_expanded} pops, {edges_relaxed} relaxations, path of {}",
        path.len()
    );

    SearchResult {
        path,
        nodes_expanded,
        edges_relaxed,
    }
}

/// Walk predecessor links backward from `end`, then reverse into
/// start-to-end order. Empty when `end` was never reached.
fn reconstruct_path(
    prev: &HashMap<CellId, CellId>,
    start: CellId,
    end: CellId,
) -> Vec<CellId> {
    if start != end && !prev.contains_key(&end) {
        return Vec::new();
    }
    let mut path = vec![end];
    let mut at = end;
    while at != start {
        let Some(&parent) = prev.get(&at) else {
            return Vec::new();
        };
        path.push(parent);
        at = parent;
    }
    path.reverse();
    path
}
