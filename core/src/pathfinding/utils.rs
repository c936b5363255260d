use crate::cell::{CellKind, Position};
use crate::graph::GridGraph;

/// A path produced by `GridGraph::find_shortest_path`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Grid-adjacent positions from start to end, both included
    pub steps: Vec<Position>,
    /// BFS distance recorded for the end cell
    pub distance: usize,
    /// Cells reached by the main search, source included
    pub cells_explored: usize,
    /// Wall-clock time of the whole call, reachability checks included
    pub elapsed_secs: f64,
}

impl ShortestPath {
    pub fn step_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Walks predecessor links back from `end`, classifying every cell strictly
/// between `end` and `start` as `Path`. Returns the positions start-first.
pub fn reconstruct_path(graph: &mut GridGraph, start: usize, end: usize) -> Vec<Position> {
    let mut path = vec![graph.cells[end].position()];
    let mut cursor = graph.cells[end].predecessor;

    while let Some(index) = cursor {
        if index == start {
            break;
        }
        graph.set_kind(index, CellKind::Path);
        path.push(graph.cells[index].position());
        cursor = graph.cells[index].predecessor;
    }

    if cursor == Some(start) {
        path.push(graph.cells[start].position());
    } else {
        tracing::warn!("predecessor chain ended before reaching the start cell");
    }

    path.reverse();
    path
}
