use super::bfs::BfsState;
use super::utils::{ShortestPath, reconstruct_path};
use crate::error::PathfindingError;
use crate::graph::GridGraph;
use std::time::Instant;

impl GridGraph {
    /// Finds a shortest start-to-end route and marks its intermediate cells
    /// as `Path`.
    ///
    /// Both endpoints must be set and mutually reachable; otherwise nothing
    /// is reclassified and the error carries the message to show the user.
    pub fn find_shortest_path(&mut self) -> Result<ShortestPath, PathfindingError> {
        let search_timer = Instant::now();

        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(report(PathfindingError::EndpointsNotSet));
        };

        let start_position = self.cells[start].position();
        let end_position = self.cells[end].position();

        if self.is_unreachable(start_position, end_position)
            || self.is_unreachable(end_position, start_position)
        {
            return Err(report(PathfindingError::Unreachable));
        }

        let mut bfs_state = BfsState::new(self, start, true);
        if !bfs_state.search(end) {
            return Err(report(PathfindingError::Unreachable));
        }

        let cells_explored = bfs_state.cells_explored;
        let graph = bfs_state.graph();
        let distance = graph.cells[end].distance.unwrap_or_default();
        let steps = reconstruct_path(graph, start, end);
        drop(bfs_state);

        let elapsed_secs = search_timer.elapsed().as_secs_f64();
        tracing::debug!(
            start = ?start_position,
            end = ?end_position,
            distance,
            cells_explored,
            "found shortest path"
        );

        Ok(ShortestPath {
            steps,
            distance,
            cells_explored,
            elapsed_secs,
        })
    }
}

fn report(error: PathfindingError) -> PathfindingError {
    tracing::warn!("{error}");
    error
}
