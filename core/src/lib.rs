pub mod cell;
pub mod error;
pub mod graph;
pub mod grid_config;
pub mod maze;
pub mod pathfinding;

// Re-export commonly used items
pub use cell::{Cell, CellKind, Marker, Position};
pub use error::{MarkError, PathfindingError};
pub use graph::GridGraph;
pub use grid_config::GridConfig;
pub use maze::Direction;
pub use pathfinding::ShortestPath;
