pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod search;

// Re-export commonly used items
pub use app::GridPathApp;
pub use args::Args;
pub use search::{RejectedMark, SearchResult};
