mod shortest_path;

use gridpath_core::{CellKind, GridConfig, GridGraph, Marker, Position};

pub fn create_test_grid(width: usize, height: usize, obstacles: &[Position]) -> GridGraph {
    let mut graph = GridGraph::new(GridConfig::new(width, height));
    for &(x, y) in obstacles {
        graph.mark_cell(x, y, Marker::Obstacle).unwrap();
    }
    graph
}

pub fn set_endpoints(graph: &mut GridGraph, start: Position, end: Position) {
    graph.mark_cell(start.0, start.1, Marker::Start).unwrap();
    graph.mark_cell(end.0, end.1, Marker::End).unwrap();
}

pub fn assert_search_state_cleared(graph: &GridGraph) {
    for cell in graph.cells() {
        assert_eq!(cell.distance(), None, "distance left on {:?}", cell.position());
        assert_eq!(cell.predecessor(), None, "predecessor left on {:?}", cell.position());
    }
}

pub fn kinds(graph: &GridGraph) -> Vec<CellKind> {
    graph.cells().map(|cell| cell.kind()).collect()
}
