use gridpath_core::{GridGraph, Marker, PathfindingError};
use rand::SeedableRng;
use rand::rngs::StdRng;

const MAZES: u64 = 200;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Running shortest-path benchmark over {MAZES} seeded mazes...\n");

    let mut graph = GridGraph::default();
    let (last_x, last_y) = (graph.width() - 1, graph.height() - 1);

    let mut found = 0;
    let mut unreachable = 0;
    let mut total_steps = 0;
    let mut total_explored = 0;
    let mut total_secs = 0.0;

    for seed in 0..MAZES {
        graph.build_graph();
        graph.generate_maze_with(&mut StdRng::seed_from_u64(seed));
        graph.clear_endpoints();

        // Odd coordinates are never maze anchors
        graph.mark_cell(1, 1, Marker::Start)?;
        graph.mark_cell(last_x - (last_x + 1) % 2, last_y - (last_y + 1) % 2, Marker::End)?;

        match graph.find_shortest_path() {
            Ok(path) => {
                found += 1;
                total_steps += path.step_count();
                total_explored += path.cells_explored;
                total_secs += path.elapsed_secs;
            }
            Err(PathfindingError::Unreachable) => unreachable += 1,
            Err(error) => return Err(error.into()),
        }
    }

    println!("✅ Paths found:      {found}");
    println!("❌ Unreachable:      {unreachable}");
    if found > 0 {
        println!("📏 Average steps:    {:.1}", total_steps as f64 / found as f64);
        println!("🔍 Average explored: {:.1}", total_explored as f64 / found as f64);
        println!("⏱️  Average time:     {:.3} ms", total_secs * 1000.0 / found as f64);
    }

    Ok(())
}
