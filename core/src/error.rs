//! Errors reported by grid operations.

use crate::cell::Position;
use std::fmt;

/// A rejected `GridGraph::mark_cell` request. The grid is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkError {
    /// The coordinates lie outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// A start cell already exists elsewhere.
    StartAlreadySet { at: Position },
    /// An end cell already exists elsewhere.
    EndAlreadySet { at: Position },
    /// The target cell is the current start.
    CellIsStart,
    /// The target cell is the current end.
    CellIsEnd,
}

impl fmt::Display for MarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => write!(f, "cell ({x}, {y}) is outside the grid"),
            Self::StartAlreadySet { at } => {
                write!(f, "start point is already set at ({}, {})", at.0, at.1)
            }
            Self::EndAlreadySet { at } => {
                write!(f, "end point is already set at ({}, {})", at.0, at.1)
            }
            Self::CellIsStart => write!(f, "cell is the start point"),
            Self::CellIsEnd => write!(f, "cell is the end point"),
        }
    }
}

impl std::error::Error for MarkError {}

/// Why `GridGraph::find_shortest_path` produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathfindingError {
    /// Start or end (or both) has not been marked.
    EndpointsNotSet,
    /// No obstacle-free route joins start and end.
    Unreachable,
}

impl fmt::Display for PathfindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointsNotSet => {
                write!(f, "Please set both start and end points before finding the path.")
            }
            Self::Unreachable => write!(f, "The start or end point is unreachable."),
        }
    }
}

impl std::error::Error for PathfindingError {}
