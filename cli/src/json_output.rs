use gridpath_core::{CellKind, GridGraph, Position};
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub grid: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rejected: Vec<JsonRejection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub width: usize,
    pub height: usize,
    pub start: Option<Position>,
    pub end: Option<Position>,
    pub obstacles: Vec<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maze_seed: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Position>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonRejection {
    pub kind: CellKind,
    pub position: Position,
    pub reason: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: f64,
    pub cells_explored: usize,
}

pub fn create_json_output(result: &SearchResult, graph: &GridGraph, args: &Args) -> JsonOutput {
    let path = result.path();

    JsonOutput {
        query: JsonQuery {
            width: args.width,
            height: args.height,
            start: args.start,
            end: args.end,
            obstacles: args.obstacles.clone(),
            maze_seed: result.maze_seed,
        },
        result: JsonResult {
            found: path.is_some(),
            message: result.failure().map(|error| error.to_string()),
            path: path.map(|path| path.steps.clone()),
            distance: path.map(|path| path.distance),
        },
        grid: graph
            .rows()
            .map(|row| row.iter().map(|cell| cell.kind().glyph()).collect())
            .collect(),
        rejected: result
            .rejected
            .iter()
            .map(|rejection| JsonRejection {
                kind: rejection.marker.into(),
                position: rejection.position,
                reason: rejection.error.to_string(),
            })
            .collect(),
        stats: path.map(|path| JsonStats {
            search_time_ms: path.elapsed_secs * 1000.0,
            cells_explored: path.cells_explored,
        }),
    }
}
