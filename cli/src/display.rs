use gridpath_core::{CellKind, GridGraph, Position};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::SearchResult;

pub fn format_position(position: Position) -> String {
    format!("({}, {})", position.0, position.1)
}

pub fn display_search_info(args: &Args, colors: &ColorScheme) {
    println!(
        "🧭 Grid of {} x {} cells",
        colors.number(&args.width.to_string()),
        colors.number(&args.height.to_string())
    );

    if let (Some(start), Some(end)) = (args.start, args.end) {
        println!(
            "🎯 Finding path from {} to {}",
            colors.position(&format_position(start)),
            colors.position(&format_position(end))
        );
    }

    if args.maze {
        println!("🌀 Generating a random maze");
    }

    if !args.obstacles.is_empty() {
        println!(
            "🧱 Placing {} obstacles",
            colors.number(&args.obstacles.len().to_string())
        );
    }

    println!("🔍 Searching...");
}

/// Renders the grid one row per line, cells separated by a space.
pub fn render_grid(graph: &GridGraph, colors: &ColorScheme) -> String {
    graph
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| colors.cell(cell.kind()).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_path_flow(steps: &[Position], colors: &ColorScheme) -> String {
    steps
        .iter()
        .map(|&step| colors.position(&format_position(step)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn display_search_results(
    result: &SearchResult,
    graph: &GridGraph,
    args: &Args,
    colors: &ColorScheme,
) {
    for rejection in &result.rejected {
        eprintln!(
            "{} {} at {}: {}",
            colors.error("⚠️  Skipped"),
            CellKind::from(rejection.marker).as_str(),
            format_position(rejection.position),
            rejection.error
        );
    }

    if args.verbose {
        if let Some(seed) = result.maze_seed {
            println!("🌱 Maze seed {}", colors.number(&seed.to_string()));
        }
        println!("\n---\n");
    }

    if let Some(path) = result.path() {
        if !args.quiet {
            println!(
                "{} Found path with {} steps:\n",
                colors.success("✅"),
                colors.number(&path.step_count().to_string())
            );
        }
        println!("{}", format_path_flow(&path.steps, colors));
    } else if let Some(error) = result.failure() {
        println!("{}", colors.error(&format!("❌ {error}")));
    }

    if !args.quiet {
        println!();
        println!("{}", render_grid(graph, colors));
    }

    if args.verbose {
        if let Some(path) = result.path() {
            display_search_statistics(path.cells_explored, path.elapsed_secs, colors);
        }
    }
}

fn display_search_statistics(cells_explored: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} cells in {} sec",
        colors.stats("📊"),
        colors.number(&cells_explored.to_string()),
        colors.number(&format!("{:.6}", search_duration))
    );
}
