/// Dimensions of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns (x axis)
    pub width: usize,
    /// Number of rows (y axis)
    pub height: usize,
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 22,
        }
    }
}
