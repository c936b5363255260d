use clap::Parser;
use gridpath_core::{GridConfig, Position};

#[derive(Parser, Debug, Clone)]
#[command(name = "gridpath")]
#[command(about = "Find the shortest path between two cells of an obstacle grid")]
pub struct Args {
    /// Grid width in cells
    #[arg(short = 'W', long, value_name = "CELLS", default_value = "32", value_parser = parse_dimension)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, value_name = "CELLS", default_value = "22", value_parser = parse_dimension)]
    pub height: usize,

    /// Start cell
    #[arg(short, long, value_name = "X,Y", value_parser = parse_position)]
    pub start: Option<Position>,

    /// End cell
    #[arg(short, long, value_name = "X,Y", value_parser = parse_position)]
    pub end: Option<Position>,

    /// Obstacle cell (repeat for more)
    #[arg(short, long = "obstacle", value_name = "X,Y", value_parser = parse_position)]
    pub obstacles: Vec<Position>,

    /// Scatter a random maze over the grid before marking cells
    #[arg(short, long)]
    pub maze: bool,

    /// Seed for maze generation (random when omitted)
    #[arg(long, value_name = "SEED", requires = "maze")]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.width, self.height)
    }
}

pub fn parse_position(value: &str) -> Result<Position, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;

    let x = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate '{}'", x.trim()))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate '{}'", y.trim()))?;

    Ok((x, y))
}

pub fn parse_dimension(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("grid dimensions must be at least 1".to_string()),
        Ok(cells) => Ok(cells),
        Err(_) => Err(format!("invalid dimension '{value}'")),
    }
}
