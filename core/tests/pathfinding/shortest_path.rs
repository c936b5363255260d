use super::{assert_search_state_cleared, create_test_grid, kinds, set_endpoints};
use gridpath_core::{CellKind, Marker, PathfindingError, Position};

fn assert_adjacent_chain(steps: &[Position]) {
    for pair in steps.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1, "{a:?} -> {b:?} is not a grid step");
    }
}

#[test]
fn test_open_grid_staircase() {
    let mut graph = create_test_grid(3, 3, &[]);
    set_endpoints(&mut graph, (0, 0), (2, 2));

    let path = graph.find_shortest_path().unwrap();

    assert_eq!(path.distance, 4);
    assert_eq!(path.step_count(), 4);
    assert_eq!(path.steps.first(), Some(&(0, 0)));
    assert_eq!(path.steps.last(), Some(&(2, 2)));
    assert_adjacent_chain(&path.steps);

    assert_eq!(graph.count(CellKind::Path), 3);
    for &(x, y) in &path.steps[1..path.steps.len() - 1] {
        assert_eq!(graph.kind_at(x, y), Some(CellKind::Path));
    }
    assert_eq!(graph.kind_at(0, 0), Some(CellKind::Start));
    assert_eq!(graph.kind_at(2, 2), Some(CellKind::End));
    assert_search_state_cleared(&graph);
}

#[test]
fn test_detour_around_wall() {
    let mut graph = create_test_grid(3, 3, &[(1, 0), (1, 1)]);
    set_endpoints(&mut graph, (0, 0), (2, 0));

    let path = graph.find_shortest_path().unwrap();

    assert_eq!(
        path.steps,
        vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)]
    );
    assert_eq!(path.distance, 6);
    assert_eq!(graph.count(CellKind::Path), 5);
    assert_eq!(graph.count(CellKind::Obstacle), 2);
    assert_search_state_cleared(&graph);
}

#[test]
fn test_full_wall_is_unreachable() {
    let mut graph = create_test_grid(3, 3, &[(1, 0), (1, 1), (1, 2)]);
    set_endpoints(&mut graph, (0, 0), (2, 2));
    let before = kinds(&graph);

    assert_eq!(graph.find_shortest_path(), Err(PathfindingError::Unreachable));

    assert_eq!(graph.count(CellKind::Path), 0);
    assert_eq!(kinds(&graph), before);
    assert_search_state_cleared(&graph);
}

#[test]
fn test_missing_end_is_reported() {
    let mut graph = create_test_grid(3, 3, &[]);
    graph.mark_cell(0, 0, Marker::Start).unwrap();
    let before = kinds(&graph);

    assert_eq!(graph.find_shortest_path(), Err(PathfindingError::EndpointsNotSet));
    assert_eq!(kinds(&graph), before);
    assert_search_state_cleared(&graph);
}

#[test]
fn test_missing_start_is_reported() {
    let mut graph = create_test_grid(3, 3, &[]);
    graph.mark_cell(2, 2, Marker::End).unwrap();

    assert_eq!(graph.find_shortest_path(), Err(PathfindingError::EndpointsNotSet));
    assert_eq!(graph.count(CellKind::Path), 0);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PathfindingError::EndpointsNotSet.to_string(),
        "Please set both start and end points before finding the path."
    );
    assert_eq!(
        PathfindingError::Unreachable.to_string(),
        "The start or end point is unreachable."
    );
}

#[test]
fn test_adjacent_endpoints_have_no_path_cells() {
    let mut graph = create_test_grid(3, 3, &[]);
    set_endpoints(&mut graph, (1, 1), (2, 1));

    let path = graph.find_shortest_path().unwrap();

    assert_eq!(path.steps, vec![(1, 1), (2, 1)]);
    assert_eq!(path.distance, 1);
    assert_eq!(graph.count(CellKind::Path), 0);
}

#[test]
fn test_corridor_path_is_unique() {
    // S . # . .
    // # . # . #
    // . . . . E
    let mut graph = create_test_grid(5, 3, &[(2, 0), (0, 1), (2, 1), (4, 1)]);
    set_endpoints(&mut graph, (0, 0), (4, 2));

    let path = graph.find_shortest_path().unwrap();

    assert_eq!(
        path.steps,
        vec![(0, 0), (1, 0), (1, 1), (1, 2), (2, 2), (3, 2), (4, 2)]
    );
    assert_eq!(path.distance, 6);
}

#[test]
fn test_search_stops_once_end_is_discovered() {
    let mut open = create_test_grid(6, 6, &[]);
    set_endpoints(&mut open, (0, 0), (1, 0));

    let path = open.find_shortest_path().unwrap();

    assert!(path.cells_explored < 36);
}

#[test]
fn test_repeated_search_reuses_path_cells() {
    let mut graph = create_test_grid(4, 4, &[(1, 1), (2, 1)]);
    set_endpoints(&mut graph, (0, 0), (3, 3));

    let first = graph.find_shortest_path().unwrap();
    let path_cells = graph.count(CellKind::Path);
    let second = graph.find_shortest_path().unwrap();

    assert_eq!(first.distance, second.distance);
    assert_eq!(graph.count(CellKind::Path), path_cells);
}

#[test]
fn test_clear_path_then_search_again() {
    let mut graph = create_test_grid(4, 4, &[]);
    set_endpoints(&mut graph, (0, 3), (3, 0));
    graph.find_shortest_path().unwrap();

    graph.clear_path();
    assert_eq!(graph.count(CellKind::Path), 0);

    graph.mark_cell(1, 3, Marker::Obstacle).unwrap();
    let path = graph.find_shortest_path().unwrap();

    assert_eq!(path.distance, 6);
    assert!(!path.steps.contains(&(1, 3)));
    assert_eq!(graph.count(CellKind::Path), 5);
}

#[test]
fn test_rebuild_forgets_endpoints() {
    let mut graph = create_test_grid(3, 3, &[(1, 1)]);
    set_endpoints(&mut graph, (0, 0), (2, 2));
    graph.find_shortest_path().unwrap();

    graph.build_graph();
    assert_eq!(graph.find_shortest_path(), Err(PathfindingError::EndpointsNotSet));
    assert!(graph.cells().all(|cell| cell.kind() == CellKind::Empty));
}

#[test]
fn test_new_endpoints_after_clear_leave_one_path() {
    let mut graph = create_test_grid(4, 4, &[]);
    set_endpoints(&mut graph, (0, 0), (3, 0));
    graph.find_shortest_path().unwrap();
    assert_eq!(graph.count(CellKind::Path), 2);

    graph.clear_endpoints();
    assert_eq!(graph.count(CellKind::Path), 0);

    set_endpoints(&mut graph, (0, 3), (3, 3));
    let path = graph.find_shortest_path().unwrap();

    assert_eq!(path.distance, 3);
    assert_eq!(graph.count(CellKind::Path), path.distance - 1);
    for &(x, y) in &path.steps[1..path.steps.len() - 1] {
        assert_eq!(graph.kind_at(x, y), Some(CellKind::Path));
    }
    assert_search_state_cleared(&graph);
}
