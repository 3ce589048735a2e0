//! Run A* on a random or file-supplied grid and draw the exploration.
//!
//! ```text
//! visualize --rows 20 --cols 40 --seed 7
//! visualize --layout maze.txt --heuristic manhattan --plain
//! RUST_LOG=debug visualize --start 0,0 --goal 24,29
//! ```

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use gridstar_core::{Cell, CellState, Grid};
use gridstar_demos::{Mode, Palette, paint, parse_cell, write_canvas};
use gridstar_paths::{Heuristic, SearchConfig, search_with};
use gridstar_rl::{DEFAULT_DENSITY, Layout, MapGen};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Draw an A* search on an obstacle grid")]
struct Args {
    /// Rows of a random grid.
    #[arg(long, default_value_t = 25)]
    rows: i32,
    /// Columns of a random grid.
    #[arg(long, default_value_t = 30)]
    cols: i32,
    /// Obstacle probability of a random grid.
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f64,
    /// Seed for the random grid and endpoints.
    #[arg(long)]
    seed: Option<u64>,
    /// Read the grid from a text layout instead (`.`, `#`, `S`, `G`).
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Start cell as ROW,COL.
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,
    /// Goal cell as ROW,COL.
    #[arg(long, value_parser = parse_cell)]
    goal: Option<Cell>,
    /// euclidean, manhattan or zero.
    #[arg(long, default_value_t = Heuristic::Euclidean)]
    heuristic: Heuristic,
    /// Give up after this many expansions.
    #[arg(long)]
    max_expansions: Option<usize>,
    /// ASCII glyphs instead of coloured blocks.
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let (grid, start, goal) = match &args.layout {
        Some(path) => from_file(path, &args)?,
        None => random(&args)?,
    };

    let mut config = SearchConfig::default().with_heuristic(args.heuristic);
    config.max_expansions = args.max_expansions;

    let outcome = search_with(&grid, start, goal, &config)?;

    let canvas = paint(
        &grid,
        Some(start),
        Some(goal),
        &outcome.trace,
        &outcome.path,
        &Palette::default(),
    );
    let mode = if args.plain { Mode::Plain } else { Mode::Color };
    write_canvas(&mut io::stdout().lock(), &canvas, mode)?;

    match outcome.cost {
        Some(cost) => println!(
            "{start} -> {goal}: cost {cost}, {} expanded, {} trace events",
            outcome.expanded,
            outcome.trace.len()
        ),
        None if outcome.truncated => println!(
            "{start} -> {goal}: gave up after {} expansions",
            outcome.expanded
        ),
        None => println!(
            "{start} -> {goal}: unreachable, {} cells explored",
            outcome.expanded
        ),
    }
    Ok(())
}

fn from_file(
    path: &Path,
    args: &Args,
) -> Result<(Grid, Cell, Cell), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let layout = Layout::parse(&text)?;
    let start = args
        .start
        .or(layout.start)
        .ok_or("no start: pass --start or put S in the layout")?;
    let goal = args
        .goal
        .or(layout.goal)
        .ok_or("no goal: pass --goal or put G in the layout")?;
    log::info!("loaded {} layout from {}", layout.grid.bounds(), path.display());
    Ok((layout.grid, start, goal))
}

fn random(args: &Args) -> Result<(Grid, Cell, Cell), Box<dyn std::error::Error>> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("random layout seed {seed}");

    let mut mg = MapGen::with_grid(Grid::new(args.rows, args.cols), StdRng::seed_from_u64(seed));
    mg.random_obstacles(args.density);

    // Explicit endpoints are carved out of the random obstacles.
    for c in [args.start, args.goal].into_iter().flatten() {
        mg.grid.set(c, CellState::Passable);
    }
    let (start, goal) = match (args.start, args.goal) {
        (Some(s), Some(g)) => (s, g),
        (s, g) => {
            let (rs, rg) = mg
                .random_endpoints()
                .ok_or("grid has fewer than two passable cells")?;
            (s.unwrap_or(rs), g.unwrap_or(rg))
        }
    };
    Ok((mg.into_grid(), start, goal))
}
