use gridpath_core::{GridGraph, Marker, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::args::Args;
use crate::search::{RejectedMark, SearchResult};

pub struct GridPathApp {
    graph: GridGraph,
    args: Args,
}

impl GridPathApp {
    pub fn new(args: Args) -> Self {
        Self {
            graph: GridGraph::new(args.grid_config()),
            args,
        }
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Applies the requested maze and markings, then searches when an
    /// endpoint was requested.
    pub fn run(&mut self) -> SearchResult {
        let maze_seed = if self.args.maze {
            Some(self.generate_maze())
        } else {
            None
        };

        let mut rejected = Vec::new();
        let markings = self
            .args
            .obstacles
            .iter()
            .map(|&position| (Marker::Obstacle, position))
            .chain(self.args.start.map(|position| (Marker::Start, position)))
            .chain(self.args.end.map(|position| (Marker::End, position)))
            .collect::<Vec<(Marker, Position)>>();

        for (marker, position) in markings {
            if let Err(error) = self.graph.mark_cell(position.0, position.1, marker) {
                tracing::debug!(?marker, ?position, %error, "marking rejected");
                rejected.push(RejectedMark {
                    marker,
                    position,
                    error,
                });
            }
        }

        let outcome = if self.args.start.is_some() || self.args.end.is_some() {
            Some(self.graph.find_shortest_path())
        } else {
            None
        };

        SearchResult {
            outcome,
            rejected,
            maze_seed,
        }
    }

    fn generate_maze(&mut self) -> u64 {
        let seed = self.args.seed.unwrap_or_else(rand::random);
        self.graph.build_graph();
        self.graph.generate_maze_with(&mut StdRng::seed_from_u64(seed));
        self.graph.clear_endpoints();
        tracing::debug!(seed, "maze generated");
        seed
    }
}
