use crate::cell::CellKind;
use crate::graph::GridGraph;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl GridGraph {
    /// Scatters obstacles over the grid using the thread-local RNG.
    ///
    /// See [`GridGraph::generate_maze_with`].
    pub fn generate_maze(&mut self) {
        self.generate_maze_with(&mut rand::rng());
    }

    /// Marks every cell at even `(x, y)` as an obstacle, plus one randomly
    /// chosen in-bounds neighbor of each.
    ///
    /// The result is a sparse obstacle field, not a perfect maze: nothing
    /// guarantees that any two open cells are connected. Expects a freshly
    /// built grid. Start and end cells, if present, are left alone.
    pub fn generate_maze_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut obstacles = 0;

        for x in (0..self.width()).step_by(2) {
            for y in (0..self.height()).step_by(2) {
                obstacles += self.place_obstacle(x, y) as usize;

                let (dx, dy) = Direction::random(rng).offset();
                if let (Some(nx), Some(ny)) =
                    (x.checked_add_signed(dx), y.checked_add_signed(dy))
                {
                    obstacles += self.place_obstacle(nx, ny) as usize;
                }
            }
        }

        tracing::debug!(obstacles, "generated maze");
    }

    fn place_obstacle(&mut self, x: usize, y: usize) -> bool {
        match self.index_of(x, y) {
            Some(index) if !self.cells[index].kind.is_endpoint() => {
                self.set_kind(index, CellKind::Obstacle);
                true
            }
            _ => false,
        }
    }
}
