use crate::cell::CellKind;
use crate::graph::GridGraph;
use std::collections::VecDeque;

/// One breadth-first pass over a grid.
///
/// Distances (and optionally predecessors) are stamped directly on the
/// grid's cells. They are cleared when the state is created and again when
/// it is dropped, whichever way the search ends.
pub struct BfsState<'a> {
    graph: &'a mut GridGraph,
    queue: VecDeque<usize>,
    record_predecessors: bool,
    pub cells_explored: usize,
}

impl<'a> BfsState<'a> {
    pub fn new(graph: &'a mut GridGraph, source: usize, record_predecessors: bool) -> Self {
        graph.clear_distances();
        graph.cells[source].distance = Some(0);

        let mut queue = VecDeque::new();
        queue.push_back(source);

        Self {
            graph,
            queue,
            record_predecessors,
            cells_explored: 1,
        }
    }

    fn visit_neighbor(&mut self, neighbor: usize, current: usize, distance: usize) -> bool {
        let cell = &mut self.graph.cells[neighbor];
        if cell.kind == CellKind::Obstacle || cell.distance.is_some() {
            return false;
        }

        cell.distance = Some(distance);
        if self.record_predecessors {
            cell.predecessor = Some(current);
        }
        self.queue.push_back(neighbor);
        self.cells_explored += 1;
        true
    }

    /// Expands the frontier until `target` is dequeued or discovered as a
    /// neighbor. The search stops at that moment without draining the queue.
    pub fn search(&mut self, target: usize) -> bool {
        while let Some(current) = self.queue.pop_front() {
            if current == target {
                return true;
            }

            let distance = self.graph.cells[current].distance.map_or(0, |d| d + 1);
            let neighbors = self.graph.cells[current].neighbors.clone();

            for neighbor in neighbors {
                if self.visit_neighbor(neighbor, current, distance) && neighbor == target {
                    return true;
                }
            }
        }

        false
    }

    pub fn graph(&mut self) -> &mut GridGraph {
        &mut *self.graph
    }
}

impl Drop for BfsState<'_> {
    fn drop(&mut self) {
        self.graph.clear_distances();
    }
}
