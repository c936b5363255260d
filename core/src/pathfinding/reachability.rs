use super::bfs::BfsState;
use crate::cell::{CellKind, Position};
use crate::graph::GridGraph;

impl GridGraph {
    /// Returns `true` when no obstacle-free route leads from `source` to
    /// `target`. Positions outside the grid and obstacle cells are
    /// unreachable, whichever side of the query they are on.
    ///
    /// Only search bookkeeping is touched; cell classifications never change
    /// and distances are cleared again before returning.
    pub fn is_unreachable(&mut self, source: Position, target: Position) -> bool {
        let (Some(source_index), Some(target_index)) = (
            self.index_of(source.0, source.1),
            self.index_of(target.0, target.1),
        ) else {
            return true;
        };
        if [source_index, target_index]
            .iter()
            .any(|&index| self.cells[index].kind == CellKind::Obstacle)
        {
            return true;
        }

        let mut bfs_state = BfsState::new(self, source_index, false);
        let reachable = bfs_state.search(target_index);

        tracing::debug!(
            ?source,
            ?target,
            reachable,
            cells_explored = bfs_state.cells_explored,
            "reachability check"
        );

        !reachable
    }
}
