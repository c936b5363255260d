use crate::cell::{Cell, CellKind, Marker, Position};
use crate::error::MarkError;
use crate::grid_config::GridConfig;

/// Neighbor offsets in linking order: left, up, right, down.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// A rectangular grid of cells joined by 4-connected adjacency.
///
/// Cells live in one row-major backing array and refer to their neighbors by
/// index, so a rebuild is a plain reset of that array. At most one cell is
/// `Start` and at most one is `End`; their indices are tracked here.
#[derive(Debug, Clone)]
pub struct GridGraph {
    config: GridConfig,
    pub(crate) cells: Vec<Cell>,
    pub(crate) start: Option<usize>,
    pub(crate) end: Option<usize>,
}

impl GridGraph {
    pub fn new(config: GridConfig) -> Self {
        let mut graph = Self {
            config,
            cells: Vec::with_capacity(config.cell_count()),
            start: None,
            end: None,
        };
        graph.build_graph();
        graph
    }

    /// Replaces every cell with a fresh `Empty` cell and re-links neighbors.
    ///
    /// All obstacles, path markings and the start/end assignment are lost.
    pub fn build_graph(&mut self) {
        let GridConfig { width, height } = self.config;

        self.cells.clear();
        for y in 0..height {
            for x in 0..width {
                self.cells.push(Cell::new(x, y));
            }
        }

        for index in 0..self.cells.len() {
            let (x, y) = self.cells[index].position();
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let neighbor = x
                    .checked_add_signed(dx)
                    .zip(y.checked_add_signed(dy))
                    .and_then(|(nx, ny)| self.index_of(nx, ny));
                if let Some(neighbor) = neighbor {
                    self.cells[index].neighbors.push(neighbor);
                }
            }
        }

        self.start = None;
        self.end = None;

        tracing::debug!(width, height, "built grid graph");
    }

    /// Requests a classification change for the cell at `(x, y)`.
    ///
    /// A rejected request leaves the grid exactly as it was.
    pub fn mark_cell(&mut self, x: usize, y: usize, marker: Marker) -> Result<(), MarkError> {
        let index = self.index_of(x, y).ok_or(MarkError::OutOfBounds { x, y })?;

        match marker {
            Marker::Start => {
                if let Some(start) = self.start {
                    if start == index {
                        return Ok(());
                    }
                    return Err(MarkError::StartAlreadySet {
                        at: self.cells[start].position(),
                    });
                }
                if self.end == Some(index) {
                    return Err(MarkError::CellIsEnd);
                }
                self.start = Some(index);
            }
            Marker::End => {
                if let Some(end) = self.end {
                    if end == index {
                        return Ok(());
                    }
                    return Err(MarkError::EndAlreadySet {
                        at: self.cells[end].position(),
                    });
                }
                if self.start == Some(index) {
                    return Err(MarkError::CellIsStart);
                }
                self.end = Some(index);
            }
            Marker::Obstacle => {
                if self.start == Some(index) {
                    return Err(MarkError::CellIsStart);
                }
                if self.end == Some(index) {
                    return Err(MarkError::CellIsEnd);
                }
            }
        }

        self.cells[index].kind = marker.into();
        Ok(())
    }

    /// Returns the start and end cells to `Empty` and forgets them, along with
    /// any `Path` cells left by a previous search.
    pub fn clear_endpoints(&mut self) {
        for index in [self.start.take(), self.end.take()].into_iter().flatten() {
            self.cells[index].kind = CellKind::Empty;
        }
        self.clear_path();
    }

    /// Returns every `Path` cell to `Empty`.
    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.kind == CellKind::Path) {
            cell.kind = CellKind::Empty;
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.config.width && y < self.config.height {
            Some(y * self.config.width + x)
        } else {
            None
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index_of(x, y).map(|index| &self.cells[index])
    }

    pub fn kind_at(&self, x: usize, y: usize) -> Option<CellKind> {
        self.cell(x, y).map(Cell::kind)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells grouped into rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.config.width.max(1))
    }

    /// Positions adjacent to `(x, y)`; empty when `(x, y)` is out of bounds.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<Position> {
        self.cell(x, y)
            .map(|cell| {
                cell.neighbors
                    .iter()
                    .map(|&neighbor| self.cells[neighbor].position())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn start(&self) -> Option<Position> {
        self.start.map(|index| self.cells[index].position())
    }

    pub fn end(&self) -> Option<Position> {
        self.end.map(|index| self.cells[index].position())
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }

    /// Sets a classification without the marking rules. Endpoints are
    /// tracked through `mark_cell` only, so `kind` must not be `Start`/`End`.
    pub(crate) fn set_kind(&mut self, index: usize, kind: CellKind) {
        debug_assert!(!kind.is_endpoint());
        self.cells[index].kind = kind;
    }

    pub(crate) fn clear_distances(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search();
        }
    }
}

impl Default for GridGraph {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
