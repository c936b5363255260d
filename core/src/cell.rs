use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Grid coordinates as `(x, y)`, zero-based from the top-left corner.
pub type Position = (usize, usize);

/// Persistent classification of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Start,
    End,
    Path,
}

impl CellKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Empty => "empty",
            CellKind::Obstacle => "obstacle",
            CellKind::Start => "start",
            CellKind::End => "end",
            CellKind::Path => "path",
        }
    }

    /// Single-character form used when the grid is printed as text.
    pub fn glyph(&self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Obstacle => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Path => '*',
        }
    }

    pub fn is_endpoint(&self) -> bool {
        matches!(self, CellKind::Start | CellKind::End)
    }
}

/// Classifications a caller may request through `GridGraph::mark_cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Start,
    End,
    Obstacle,
}

impl From<Marker> for CellKind {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Start => CellKind::Start,
            Marker::End => CellKind::End,
            Marker::Obstacle => CellKind::Obstacle,
        }
    }
}

/// One grid position.
///
/// `distance` and `predecessor` are search bookkeeping: `None` means the cell
/// has not been reached by the search in progress. Both are cleared after
/// every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    pub(crate) kind: CellKind,
    pub(crate) neighbors: SmallVec<[usize; 4]>,
    pub(crate) distance: Option<usize>,
    pub(crate) predecessor: Option<usize>,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            kind: CellKind::Empty,
            neighbors: SmallVec::new(),
            distance: None,
            predecessor: None,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> Position {
        (self.x, self.y)
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Indices of adjacent cells in the grid's backing array.
    pub fn neighbor_indices(&self) -> &[usize] {
        &self.neighbors
    }

    pub fn distance(&self) -> Option<usize> {
        self.distance
    }

    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }

    pub(crate) fn reset_search(&mut self) {
        self.distance = None;
        self.predecessor = None;
    }
}
