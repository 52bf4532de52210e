//! CLI for maze generation

use clap::Parser;
use env_logger::Env;
use solvable_maze::maze_generator::MazeGenerator;

/// Random maze with a way from the top-left to the bottom-right corner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 60)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Mark one way from start to target
    #[arg(short, long)]
    route: bool,

    /// Enable debug messages
    #[arg(short, long)]
    debug: bool,
}

/// Generate maze, print it
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(if args.debug {
        "debug"
    } else {
        "warn"
    }))
    .init();

    let mut gen = MazeGenerator::new(args.seed);
    let mut maze = gen.generate_maze(args.width, args.height)?;
    if args.route {
        maze.mark_winning_route();
    }
    println!("{}", maze);
    Ok(())
}
