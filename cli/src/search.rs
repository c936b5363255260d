use gridpath_core::{MarkError, Marker, PathfindingError, Position, ShortestPath};

/// A marking request the grid turned down.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedMark {
    pub marker: Marker,
    pub position: Position,
    pub error: MarkError,
}

pub struct SearchResult {
    /// `None` when neither endpoint was requested and no search ran
    pub outcome: Option<Result<ShortestPath, PathfindingError>>,
    pub rejected: Vec<RejectedMark>,
    pub maze_seed: Option<u64>,
}

impl SearchResult {
    pub fn path(&self) -> Option<&ShortestPath> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().ok())
    }

    pub fn failure(&self) -> Option<PathfindingError> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().err().copied())
    }
}
