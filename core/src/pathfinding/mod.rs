mod bfs;
pub mod reachability;
pub mod shortest_path;
pub mod utils;

pub use utils::ShortestPath;
